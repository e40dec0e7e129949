use crate::filters::FilterMode;
use crate::input::PathFilter;
use crate::render::RenderConfig;
use crate::tree::ExtMode;
use clap::Parser;
use std::path::PathBuf;

const EXAMPLES: &str = "\
Examples:
  fapolicyd-cli --dump | trusttree
  fapolicyd-cli --dump | trusttree --ascii
  fapolicyd-cli --dump | trusttree --prefix /boot/efi --min-count 3 --compact
  fapolicyd-cli --dump | trusttree --max-depth 3
  fapolicyd-cli --dump | trusttree --ext-mode full
  fapolicyd-cli --dump | trusttree --emit-filter --emit-filter-mode all";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "trusttree",
    version,
    about = "Summarize a trust database dump as a directory tree aggregated by file extension",
    after_help = EXAMPLES
)]
pub struct Args {
    /// Dump file to read (default: standard input)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Use ASCII tree characters instead of Unicode box drawing
    #[arg(long)]
    pub ascii: bool,

    /// Prune branches whose total count is below this number (1 = no pruning)
    #[arg(long = "min-count", default_value_t = 1)]
    pub min_count: usize,

    /// Limit printed depth, root is depth 0 (0 = unlimited)
    #[arg(long = "max-depth", default_value_t = 0)]
    pub max_depth: usize,

    /// At each level, only show the top N children by count (0 = all)
    #[arg(long, default_value_t = 0)]
    pub top: usize,

    /// Only include paths starting with this prefix
    #[arg(long, default_value = "/")]
    pub prefix: String,

    /// Exclude paths whose full path matches this regex
    #[arg(long = "exclude-regex", default_value = "")]
    pub exclude_regex: String,

    /// Only include paths whose full path matches this regex
    #[arg(long = "include-regex", default_value = "")]
    pub include_regex: String,

    /// How to compute the aggregated extension leaf
    #[arg(long = "ext-mode", value_enum, default_value_t = ExtMode::Last)]
    pub ext_mode: ExtMode,

    /// Do not show counts at each node
    #[arg(long = "no-counts")]
    pub no_counts: bool,

    /// Collapse single-child chains into 'a/b/c' segments
    #[arg(long)]
    pub compact: bool,

    /// Emit a JSON summary instead of a tree
    #[arg(long)]
    pub json: bool,

    /// Emit suggested filter patterns for the pruned tree
    #[arg(long = "emit-filter")]
    pub emit_filter: bool,

    /// Filter suggestion style
    #[arg(long = "emit-filter-mode", value_enum, default_value_t = FilterMode::Ext)]
    pub emit_filter_mode: FilterMode,

    /// Increase log verbosity on stderr (repeatable)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl Args {
    /// Enforce invariants after parsing.
    pub fn validated(mut self) -> Self {
        if self.quiet {
            self.verbose = 0;
        }
        self
    }

    /// Rendering options shared by the text and JSON renderers.
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            ascii: self.ascii,
            show_counts: !self.no_counts,
            max_depth: self.max_depth,
            top: self.top,
            compact: self.compact,
        }
    }

    /// Compile the inclusion filter. Fails on a malformed regex.
    pub fn path_filter(&self) -> anyhow::Result<PathFilter> {
        PathFilter::new(&self.prefix, &self.include_regex, &self.exclude_regex)
    }

    /// Default log directive for the chosen verbosity.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Input file, or `None` for standard input (absent or `-`).
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input.as_ref().filter(|p| p.as_os_str() != "-")
    }
}
