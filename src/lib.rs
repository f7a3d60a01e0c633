mod app;
mod context;
mod error;
pub mod renderer;
mod variant;

pub use app::{App, LoopState, EXIT_KEY};
pub use context::{load_gl, Context};
pub use error::{Error, Result, ShaderStage};
pub use variant::{Extent2D, Scene, Variant};

use std::process;

/// Status every fatal setup failure exits with.
pub const FAILURE: i32 = -1;

/// Opens `variant`'s window and renders until it is closed. Setup failures
/// are printed and end the process with `FAILURE`.
pub fn run(variant: &Variant) -> ! {
    match App::new(variant) {
        Ok(app) => app.run(),
        Err(err) => {
            println!("{}", err);
            process::exit(FAILURE);
        }
    }
}
