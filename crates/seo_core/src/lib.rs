//! SEO analysis core: pure submission controller and view-model helpers.
mod effect;
mod form;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use form::{split_field, AnalysisRequest, FormField, FormState};
pub use msg::Msg;
pub use state::{
    download_link, AppState, Phase, RequestId, DEFAULT_BASE_ADDRESS, ERROR_PREFIX,
    IN_PROGRESS_MESSAGE, UNKNOWN_ERROR_MESSAGE,
};
pub use update::update;
pub use view_model::AppViewModel;
