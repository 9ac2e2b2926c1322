pub mod pending_rebind;
pub mod rebind_workflow;
