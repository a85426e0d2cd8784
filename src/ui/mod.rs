/// UI layer: external collaborator of the core. Renders whatever the
/// current bundle returns and feeds raw constraint changes back through the
/// validated setters on [`crate::state::AppState`].
pub mod panels;
pub mod plot;
