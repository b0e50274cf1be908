pub mod api;
pub mod core;
pub mod infra;
pub mod models;

pub mod ax_state {
    use crate::core::fixtures::Fixtures;

    pub struct AppState {
        pub fixtures: Fixtures,
    }

    impl AppState {
        pub fn load() -> anyhow::Result<Self> {
            Ok(Self {
                fixtures: Fixtures::load()?,
            })
        }
    }
}

pub use ax_state::AppState;
