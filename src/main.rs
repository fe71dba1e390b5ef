mod allocator;

use std::process::ExitCode;

use sweettext::app::App;

fn main() -> ExitCode {
    match App::init() {
        Ok(app) => app.execute(),
        Err(err) => App::fail(&err),
    }
}
