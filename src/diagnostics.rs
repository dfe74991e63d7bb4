//! Advisory messages produced while converting.
//!
//! Nothing here changes the result of a conversion. The converter receives a
//! [`Diagnostics`] implementation when it is built and reports skip and
//! fallback decisions through it.

use std::cell::RefCell;
use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum Diagnostic {
    /// The armature uses IK constraints and was not converted.
    IkSkipped { armature: String },
    /// A `tweenEasing` other than `0` or `null`; linear interpolation is used.
    UnsupportedEasing {
        armature: String,
        animation: String,
        bone: String,
        easing: f32,
    },
    /// A `curve` that is not a single four-value segment.
    TruncatedCurve {
        armature: String,
        animation: String,
        bone: String,
        len: usize,
    },
    ArmatureConverted {
        armature: String,
        animations: usize,
    },
}

impl Diagnostic {
    /// Progress reports are only shown in verbose mode.
    pub fn is_progress(&self) -> bool {
        matches!(self, Diagnostic::ArmatureConverted { .. })
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::IkSkipped { armature } => {
                write!(f, "IK is not supported, skip. armature name={}", armature)
            }
            Diagnostic::UnsupportedEasing { armature, animation, bone, easing } => write!(
                f,
                "easing '{}' not supported, linear is used. armature={}, animation={}, bone={}",
                easing, armature, animation, bone
            ),
            Diagnostic::TruncatedCurve { armature, animation, bone, len } => write!(
                f,
                "curve of {} values can not be expressed by one segment, only the first one is used. armature={}, animation={}, bone={}",
                len, armature, animation, bone
            ),
            Diagnostic::ArmatureConverted { armature, animations } => write!(
                f,
                "converted armature {} ({} animations)",
                armature, animations
            ),
        }
    }
}

pub trait Diagnostics {
    fn report(&self, diagnostic: Diagnostic);
}

impl<T: Diagnostics + ?Sized> Diagnostics for &T {
    fn report(&self, diagnostic: Diagnostic) {
        (**self).report(diagnostic)
    }
}

/// Drops everything.
#[derive(Copy, Clone, Default, Debug)]
pub struct NoopDiagnostics;

impl Diagnostics for NoopDiagnostics {
    fn report(&self, _diagnostic: Diagnostic) {}
}

/// Forwards diagnostics to `tracing`.
#[derive(Copy, Clone, Default, Debug)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn report(&self, diagnostic: Diagnostic) {
        if diagnostic.is_progress() {
            tracing::debug!("{}", diagnostic);
        } else {
            tracing::warn!("{}", diagnostic);
        }
    }
}

/// Keeps every diagnostic in memory, in report order.
#[derive(Default, Debug)]
pub struct CollectedDiagnostics {
    reported: RefCell<Vec<Diagnostic>>,
}

impl CollectedDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&self) -> Vec<Diagnostic> {
        self.reported.borrow_mut().drain(..).collect()
    }
}

impl Diagnostics for CollectedDiagnostics {
    fn report(&self, diagnostic: Diagnostic) {
        self.reported.borrow_mut().push(diagnostic);
    }
}
