use super::dependency::DependencyStub;
use std::fmt;

/// Package manager reported for a dependency
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PackageManager {
    Maven,
    Gradle,
    Npm,
    Yarn,
    Poetry,
    Pip,
    Unknown(String),
}

impl PackageManager {
    pub fn parse(value: &str) -> Self {
        match value {
            "maven" => PackageManager::Maven,
            "gradle" => PackageManager::Gradle,
            "npm" => PackageManager::Npm,
            "yarn" => PackageManager::Yarn,
            "poetry" => PackageManager::Poetry,
            "pip" => PackageManager::Pip,
            other => PackageManager::Unknown(other.to_string()),
        }
    }

    /// Registry ecosystem the package manager publishes to, if known
    pub fn ecosystem(&self) -> Option<Ecosystem> {
        match self {
            PackageManager::Maven | PackageManager::Gradle => Some(Ecosystem::MavenCentral),
            PackageManager::Npm | PackageManager::Yarn => Some(Ecosystem::Npmjs),
            PackageManager::Poetry | PackageManager::Pip => Some(Ecosystem::PyPi),
            PackageManager::Unknown(_) => None,
        }
    }
}

impl From<&str> for PackageManager {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

/// Registry namespace used by attribution lookups (`{type}/{provider}`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ecosystem {
    MavenCentral,
    Npmjs,
    PyPi,
}

impl Ecosystem {
    pub fn as_path(&self) -> &'static str {
        match self {
            Ecosystem::MavenCentral => "maven/mavencentral",
            Ecosystem::Npmjs => "npm/npmjs",
            Ecosystem::PyPi => "pypi/pypi",
        }
    }
}

impl fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path())
    }
}

/// Placeholder namespace for packages without one
pub const NO_NAMESPACE: &str = "-";

/// Registry coordinates of a dependency
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageCoordinates {
    ecosystem: Ecosystem,
    namespace: String,
    name: String,
    version: String,
}

impl PackageCoordinates {
    pub fn new(
        ecosystem: Ecosystem,
        namespace: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            ecosystem,
            namespace: namespace.into(),
            name: name.into(),
            version: version.into(),
        }
    }

    /// Resolves coordinates from a dependency stub
    ///
    /// A `group:artifact` style name is split on the first `:` into namespace
    /// and package name; anything after a second `:` is dropped. Names without
    /// a separator get the `-` namespace. Returns `None` when the package
    /// manager has no known ecosystem.
    pub fn from_dependency(dependency: &DependencyStub) -> Option<Self> {
        let ecosystem = PackageManager::parse(&dependency.package_manager).ecosystem()?;

        let mut parts = dependency.name.split(':');
        let first = parts.next().unwrap_or_default();
        let (namespace, name) = match parts.next() {
            Some(second) => (first, second),
            None => (NO_NAMESPACE, dependency.name.as_str()),
        };

        Some(Self::new(ecosystem, namespace, name, dependency.version.as_str()))
    }

    pub fn ecosystem(&self) -> Ecosystem {
        self.ecosystem
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// `{ecosystem}/{namespace}/{name}/{version}`
    pub fn path(&self) -> String {
        format!(
            "{}/{}/{}/{}",
            self.ecosystem.as_path(),
            self.namespace,
            self.name,
            self.version
        )
    }
}
