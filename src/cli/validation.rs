use crate::cli::args::CliArgs;

pub fn validate(args: &CliArgs) -> Result<(), String> {
    if let Some(page) = args.page {
        if page == 0 {
            return Err("invalid page, expected positive integer".to_string());
        }
    }
    if let Some(page_size) = args.page_size {
        if page_size == 0 {
            return Err("invalid page-size, expected positive integer".to_string());
        }
    }
    if let Some(raw) = args.status.as_deref() {
        crate::directory::StatusFilter::parse(raw).ok_or_else(|| {
            format!("invalid --status '{raw}', expected all, active, inactive or pending")
        })?;
    }
    if let Some(raw) = args.format.as_deref() {
        crate::output::OutputFormat::parse(raw).ok_or_else(|| {
            format!("invalid --format '{raw}', expected plain, vivid, json or html")
        })?;
    }
    if let Some(raw) = args.as_of.as_deref() {
        crate::display::parse_date(raw)
            .ok_or_else(|| format!("invalid --as-of '{raw}', expected YYYY-MM-DD"))?;
    }
    if args.interactive && args.serve.is_some() {
        return Err("use either --interactive or --serve, not both".to_string());
    }
    if args.interactive && args.output.is_some() {
        return Err("--output cannot be combined with --interactive".to_string());
    }
    Ok(())
}
