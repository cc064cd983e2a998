//! Navigation-related state types.

/// Specifying the different views of the wizard.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum View {
    Welcome,
    StepOne,
    StepTwo,
    Plan,
}

/// Specifying what the plan view is currently showing.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PlanStatus {
    Loading,
    Loaded,
    Failed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view() {
        assert_eq!(View::Welcome, View::Welcome);
        assert_ne!(View::StepOne, View::StepTwo);
        assert_ne!(View::StepTwo, View::Plan);
    }

    #[test]
    fn test_plan_status() {
        assert_eq!(PlanStatus::Loading, PlanStatus::Loading);
        assert_ne!(PlanStatus::Loaded, PlanStatus::Failed);
    }
}
