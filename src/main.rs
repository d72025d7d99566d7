use agriscan::{analyzer, cli, config, report, scanner};
use agriscan_common::error::{AgriScanError, Result};
use chrono::Local;
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Diagnose {
            path,
            output,
            max_size,
            api_key,
            model,
        } => {
            println!("🌿 agriscan - plant disease diagnosis\n");

            let api_key = match api_key {
                Some(key) => key,
                None => config.get_api_key()?,
            };
            let model = model.unwrap_or_else(|| config.model.clone());
            let max_size = max_size.unwrap_or(config.max_image_size);

            println!("[1/2] Scanning for photos...");
            let images = scanner::collect_images(&path)?;
            if images.is_empty() {
                return Err(AgriScanError::NoImagesFound(path.display().to_string()));
            }
            println!("✔ {} photo(s) found\n", images.len());

            println!(
                "[2/2] Analyzing with {} ({})...",
                model,
                Local::now().format("%Y-%m-%d %H:%M")
            );

            let client = analyzer::GeminiClient::new(api_key, model);
            let progress = if images.len() > 1 {
                Some(report::batch_progress(images.len() as u64))
            } else {
                None
            };

            let mut records = Vec::new();
            let mut failures = 0usize;

            for image in &images {
                if let Some(pb) = &progress {
                    pb.set_message(image.file_name.clone());
                }

                match client
                    .analyze_file(&image.path, max_size, cli.verbose)
                    .await
                {
                    Ok(result) => {
                        if let Some(pb) = &progress {
                            pb.suspend(|| {
                                println!("{}", report::format_report(&image.file_name, &result));
                            });
                        } else {
                            println!("{}", report::format_report(&image.file_name, &result));
                        }
                        records.push(report::DiagnosisRecord {
                            file_name: image.file_name.clone(),
                            result,
                        });
                    }
                    Err(e) => {
                        failures += 1;
                        if let Some(pb) = &progress {
                            pb.suspend(|| println!("✗ {}: {}", image.file_name, e));
                        } else {
                            // single image: abort with the error itself
                            return Err(e);
                        }
                    }
                }

                if let Some(pb) = &progress {
                    pb.inc(1);
                }
            }

            if let Some(pb) = progress {
                pb.finish_and_clear();
            }

            if let Some(output_path) = output {
                let json = serde_json::to_string_pretty(&records)?;
                std::fs::write(&output_path, json)?;
                println!("✔ Results written to {}", output_path.display());
            }

            if failures > 0 {
                println!("\n✅ Done ({} analyzed, {} failed)", records.len(), failures);
            } else {
                println!("\n✅ Done ({} analyzed)", records.len());
            }
        }

        Commands::Config {
            set_api_key,
            set_model,
            show,
        } => {
            let mut config = config;

            if let Some(key) = set_api_key {
                config.set_api_key(key)?;
                println!("✔ API key saved");
            }

            if let Some(model) = set_model {
                config.model = model;
                config.save()?;
                println!("✔ Model saved");
            }

            if show {
                println!("Settings:");
                println!("  model:          {}", config.model);
                println!("  max image size: {}px", config.max_image_size);
                println!(
                    "  API key:        {}",
                    if config.api_key.is_some() {
                        "configured"
                    } else {
                        "not set"
                    }
                );
            }
        }
    }

    Ok(())
}
