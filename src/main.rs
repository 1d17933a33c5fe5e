mod allocator;
mod app;
mod config;
mod dump;
mod exclusion;
mod file;
mod types;

use crate::app::App;

fn main() -> anyhow::Result<()> {
    App::init()?.execute()
}
