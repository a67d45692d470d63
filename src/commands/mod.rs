mod context;
pub mod init;
pub mod inspect;
pub mod render;

pub use context::{color_choice_to_mode, load_config, resolve_artifacts_dir, write_output};
pub use init::{generate_config_template, run_init, run_init_impl};
pub use inspect::{run_inspect, run_inspect_impl};
pub use render::{run_render, run_render_impl};
