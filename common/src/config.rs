/// Global configuration options for an investigation run.
///
/// This struct controls the runtime behavior of the application, including
/// UI verbosity and privacy features. It is typically constructed from the
/// parsed CLI arguments.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Toggles the display of the startup ASCII banner.
    ///
    /// If `true`, the application starts immediately with log output/spinners
    /// without printing the stylized branding. Useful for clean logs or
    /// frequent executions.
    pub no_banner: bool,

    /// Enables privacy mode for sensitive data in the output.
    ///
    /// When enabled, personally identifiable information (PII) or sensitive
    /// network details are masked.
    ///
    /// # Masked Fields
    /// * Public IP addresses (IPv4 hosts, IPv6 suffixes)
    /// * Hostnames
    /// * Geographic coordinates
    ///
    /// Use this when sharing screenshots or logs publicly.
    pub redact: bool,

    /// Controls the visual density and formatting of the terminal output.
    ///
    /// This value is typically mapped from the `-q` or `--quiet` CLI flags.
    ///
    /// # Levels
    /// * **0** (Default): Full UI, including colors, spinners, and section headers.
    /// * **1**: Reduced styling. No banner, simplified sections.
    /// * **2**: Raw mode. Output is strictly findings, suitable for piping into other tools.
    pub quiet: u8,
}
