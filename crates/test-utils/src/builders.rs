use goreleaser_step::options::{
    ReleaseOptions, BRANCH, BUILD_DATE, GO_VERSION, ORGANISATION, REVISION, ROOT_PACKAGE, VERSION,
};
use goreleaser_step::secrets::SecretRecord;

/// The seven required inputs, in validation order.
pub const REQUIRED_OPTIONS: [&str; 7] = [
    ORGANISATION,
    REVISION,
    BRANCH,
    VERSION,
    BUILD_DATE,
    GO_VERSION,
    ROOT_PACKAGE,
];

/// Builder for `ReleaseOptions`, starting from a fully populated set.
pub struct ReleaseOptionsBuilder {
    options: ReleaseOptions,
}

impl ReleaseOptionsBuilder {
    pub fn new() -> Self {
        Self {
            options: ReleaseOptions {
                organisation: Some("acme".to_string()),
                revision: Some("4f2c9e1".to_string()),
                branch: Some("main".to_string()),
                version: Some("1.2.3".to_string()),
                build_date: Some("2024-05-01T10:00:00Z".to_string()),
                go_version: Some("1.22.3".to_string()),
                root_package: Some("github.com/acme/widget".to_string()),
                timeout: Some("30m".to_string()),
            },
        }
    }

    pub fn organisation(mut self, org: &str) -> Self {
        self.options.organisation = Some(org.to_string());
        self
    }

    pub fn timeout(mut self, timeout: Option<&str>) -> Self {
        self.options.timeout = timeout.map(str::to_string);
        self
    }

    /// Unset one of the required inputs by its flag name.
    pub fn without(mut self, option: &str) -> Self {
        let slot = match option {
            ORGANISATION => &mut self.options.organisation,
            REVISION => &mut self.options.revision,
            BRANCH => &mut self.options.branch,
            VERSION => &mut self.options.version,
            BUILD_DATE => &mut self.options.build_date,
            GO_VERSION => &mut self.options.go_version,
            ROOT_PACKAGE => &mut self.options.root_package,
            other => panic!("unknown option '{other}'"),
        };
        *slot = None;
        self
    }

    pub fn build(self) -> ReleaseOptions {
        self.options
    }
}

impl Default for ReleaseOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A secret with a `password` field set to `token`.
pub fn token_secret(name: &str, token: &str) -> SecretRecord {
    SecretRecord::new(name).with_field("password", token)
}

/// A secret with no `password` field at all.
pub fn secret_without_token(name: &str) -> SecretRecord {
    SecretRecord::new(name).with_field("username", "bot")
}
