use clap::{ArgAction, Parser};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "patientdesk",
    version,
    about = "patient directory browser",
    long_about = "patientdesk browses patient records: search by name, email or phone, filter by status, page through the results and open the full record of one patient.\n\nExamples:\n  patientdesk\n  patientdesk -s john -S active\n  patientdesk -S pending -d 3 -f vivid\n  patientdesk -p ./patients.json -o ./patients.html\n  patientdesk -i\n  patientdesk --serve 127.0.0.1:8080\n\nTip: Use --init-config to write a commented config file to ~/.patientdesk/config.yml."
)]
pub struct CliArgs {
    #[arg(
        short = 'C',
        long = "cfg",
        visible_alias = "config",
        value_name = "FILE",
        help_heading = "Input",
        help = "Path to config file (defaults to ~/.patientdesk/config.yml when present)."
    )]
    pub config: Option<String>,

    #[arg(
        long = "init-config",
        help_heading = "Input",
        help = "Write a commented default config file and exit."
    )]
    pub init_config: bool,

    #[arg(
        short = 'p',
        long = "pf",
        visible_aliases = ["patients", "patients-file"],
        value_name = "FILE",
        help_heading = "Input",
        help = "Load patient records from a JSON or YAML file instead of the built-in records."
    )]
    pub patients_file: Option<String>,

    #[arg(
        short = 's',
        long = "q",
        visible_alias = "search",
        value_name = "TERM",
        help_heading = "View",
        help = "Search term matched against first name, last name, email and phone."
    )]
    pub search: Option<String>,

    #[arg(
        short = 'S',
        long = "st",
        visible_alias = "status",
        value_name = "STATUS",
        help_heading = "View",
        help = "Status filter: all, active, inactive or pending."
    )]
    pub status: Option<String>,

    #[arg(
        short = 'n',
        long = "pg",
        visible_alias = "page",
        value_name = "N",
        help_heading = "View",
        help = "Page to show (1-based)."
    )]
    pub page: Option<usize>,

    #[arg(
        long = "ps",
        visible_alias = "page-size",
        value_name = "N",
        help_heading = "View",
        help = "Rows per page (default 10)."
    )]
    pub page_size: Option<usize>,

    #[arg(
        short = 'd',
        long = "vw",
        visible_alias = "view",
        value_name = "ID",
        help_heading = "View",
        help = "Open the detail view of the patient with this id."
    )]
    pub view: Option<String>,

    #[arg(
        long = "rp",
        visible_alias = "reset-page",
        num_args = 0..=1,
        default_missing_value = "true",
        help_heading = "View",
        help = "Go back to page 1 whenever the search or status filter changes."
    )]
    pub reset_page: Option<bool>,

    #[arg(
        long = "as-of",
        value_name = "YYYY-MM-DD",
        help_heading = "View",
        help = "Compute ages as of this date instead of today."
    )]
    pub as_of: Option<String>,

    #[arg(
        short = 'f',
        long = "fmt",
        visible_alias = "format",
        value_name = "FORMAT",
        help_heading = "Output",
        help = "Output format: plain, vivid, json or html (inferred from --output when omitted)."
    )]
    pub format: Option<String>,

    #[arg(
        short = 'o',
        long = "out",
        visible_alias = "output",
        value_name = "FILE",
        help_heading = "Output",
        help = "Write the rendered view to a file instead of stdout."
    )]
    pub output: Option<String>,

    #[arg(
        short = 'c',
        long = "clr",
        visible_alias = "color",
        help_heading = "Output",
        help = "Enable colored output (overrides --no-color)."
    )]
    pub color: bool,

    #[arg(
        long = "nc",
        visible_alias = "no-color",
        help_heading = "Output",
        help = "Disable colored output."
    )]
    pub no_color: bool,

    #[arg(
        short = 'v',
        long = "vb",
        visible_alias = "verbose",
        action = ArgAction::Count,
        help_heading = "Output",
        help = "Increase log verbosity (-v, -vv, -vvv)."
    )]
    pub verbose: u8,

    #[arg(
        short = 'i',
        long = "it",
        visible_alias = "interactive",
        help_heading = "Mode",
        help = "Browse interactively: read commands from stdin and re-render after each one."
    )]
    pub interactive: bool,

    #[arg(
        long = "srv",
        visible_alias = "serve",
        value_name = "ADDR",
        num_args = 0..=1,
        default_missing_value = "",
        help_heading = "Mode",
        help = "Serve the directory as an HTML page at / (address defaults to the config 'listen' or 127.0.0.1:8080)."
    )]
    pub serve: Option<String>,
}
