pub mod traits;
pub mod layout;
pub mod palette;
pub mod inheritance;
pub mod manager;

pub use manager::{AppConfig, ConfigManager};
pub use layout::LayoutConfig;
pub use palette::PaletteConfig;
pub use inheritance::InheritanceConfig;
