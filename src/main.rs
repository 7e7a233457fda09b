use anyhow::Context;
use chrono::Local;
use log::info;
use rikolog_logo::{config, create_logo};
use std::io::Write;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {:<5} {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();

    let requests = config::logo_requests();
    let mut generated = 0;
    for request in &requests {
        let rendered = create_logo(request)
            .with_context(|| format!("Failed to generate {}", request.output_path.display()))?;
        if rendered.is_some() {
            generated += 1;
        }
    }

    info!("{}/{} logo images generated", generated, requests.len());
    Ok(())
}
