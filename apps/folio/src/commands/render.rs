//! Page rendering.

use super::SourceArgs;
use anyhow::{Context, Result};
use atomicwrites::{AllowOverwrite, AtomicFile};
use clap::Args;
use colored::Colorize;
use folio_config::SiteStore;
use folio_render::effects::TracingEffects;
use folio_render::render::RenderContext;
use folio_render::site::current_year;
use folio_render::{html, render_all};
use std::collections::HashSet;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Page templates to render
    #[arg(required = true)]
    pages: Vec<PathBuf>,

    /// Output directory; each page keeps its file name
    #[arg(long, short)]
    out: PathBuf,

    /// Copyright year (defaults to the current year)
    #[arg(long)]
    year: Option<i32>,

    #[command(flatten)]
    source: SourceArgs,
}

pub async fn execute(args: RenderArgs) -> Result<()> {
    let mut names = HashSet::new();
    let mut jobs = vec![];
    for page in &args.pages {
        let name = page
            .file_name()
            .with_context(|| format!("Not a file: {}", page.display()))?;
        if !names.insert(name) {
            anyhow::bail!(
                "Two pages would be written to the same output file: {}",
                name.to_string_lossy()
            );
        }
        jobs.push((page, args.out.join(name)));
    }

    let persisted = Arc::new(args.source.state.file_store()?);
    let store = SiteStore::load(args.source.remote.clone(), persisted).await;
    eprintln!("{} Config loaded from {}", "INFO".blue(), store.source());

    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("Failed to create directory {}", args.out.display()))?;
    let year = args.year.unwrap_or_else(current_year);

    let mut failed_pages = 0;
    for (page, target) in jobs {
        tracing::debug!("rendering {} -> {}", page.display(), target.display());
        let raw = std::fs::read_to_string(page)
            .with_context(|| format!("Failed to read page {}", page.display()))?;
        let mut doc = html::parse(&raw);
        let mut effects = TracingEffects;
        let report = render_all(
            store.config(),
            &mut RenderContext::new(&mut doc, &mut effects, year),
        );

        let rendered = html::serialize(&doc);
        AtomicFile::new(&target, AllowOverwrite)
            .write(|f| f.write_all(rendered.as_bytes()))
            .with_context(|| format!("Failed to write {}", target.display()))?;

        let failures: Vec<_> = report.failures().collect();
        if failures.is_empty() {
            println!(
                "{} {} ({} placeholders)",
                "OK".green(),
                target.display().to_string().cyan(),
                report.touched()
            );
        } else {
            failed_pages += 1;
            println!(
                "{} {} ({} placeholders, {} section(s) failed)",
                "WARN".yellow(),
                target.display().to_string().cyan(),
                report.touched(),
                failures.len()
            );
            for (section, err) in failures {
                println!("  - {section}: {err}");
            }
        }
    }

    if failed_pages > 0 {
        eprintln!(
            "{} {failed_pages} page(s) rendered with failed sections",
            "WARN".yellow()
        );
    }
    Ok(())
}
