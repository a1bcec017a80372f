use std::fmt;
use std::path::PathBuf;

/// Detected operating system platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Os {
    MacOs,
    Linux,
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Os::MacOs => write!(f, "macos"),
            Os::Linux => write!(f, "linux"),
        }
    }
}

/// Processor architecture, used to locate the Homebrew prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arch {
    Arm64,
    X86_64,
}

/// Platform information for the current system.
#[derive(Debug, Clone)]
pub struct Platform {
    pub os: Os,
    pub arch: Arch,
}

impl Platform {
    /// Detect the current platform.
    #[must_use]
    pub fn detect() -> Self {
        Self {
            os: Self::detect_os(),
            arch: Self::detect_arch(),
        }
    }

    /// Create a platform with explicit values (for testing).
    #[must_use]
    pub fn new(os: Os, arch: Arch) -> Self {
        Self { os, arch }
    }

    #[must_use]
    pub fn is_macos(&self) -> bool {
        self.os == Os::MacOs
    }

    /// Homebrew installation prefix for this platform.
    ///
    /// Apple silicon Macs use `/opt/homebrew`; Intel Macs and Linuxbrew
    /// installations use `/usr/local`.
    #[must_use]
    pub fn brew_prefix(&self) -> PathBuf {
        match (self.os, self.arch) {
            (Os::MacOs, Arch::Arm64) => PathBuf::from("/opt/homebrew"),
            _ => PathBuf::from("/usr/local"),
        }
    }

    fn detect_os() -> Os {
        if cfg!(target_os = "macos") {
            Os::MacOs
        } else {
            // Default to Linux for other Unix-like systems
            Os::Linux
        }
    }

    fn detect_arch() -> Arch {
        if cfg!(target_arch = "aarch64") {
            Arch::Arm64
        } else {
            Arch::X86_64
        }
    }
}
