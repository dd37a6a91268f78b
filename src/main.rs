use std::process::ExitCode;

fn main() -> ExitCode {
    video_catalog_lib::run()
}
