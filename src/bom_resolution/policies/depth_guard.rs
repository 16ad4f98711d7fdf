use crate::bom_resolution::domain::Barcode;
use crate::shared::error::ResolveError;

/// Maximum number of levels in a resolved composition tree (root = level 1).
///
/// This cap is the only protection against cyclic or runaway composition
/// graphs, and it must stay identical wherever compositions are resolved.
pub const MAX_COMPOSITION_DEPTH: usize = 10;

/// DepthGuard policy deciding whether expansion may go one level deeper
///
/// Exceeding the cap is a hard failure, never a truncation. With
/// `detect_cycles` enabled the guard additionally rejects a barcode that
/// already appears among the active ancestors of the current branch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DepthGuard {
    detect_cycles: bool,
}

impl DepthGuard {
    pub fn new(detect_cycles: bool) -> Self {
        Self { detect_cycles }
    }

    pub fn max_depth(&self) -> usize {
        MAX_COMPOSITION_DEPTH
    }

    pub fn detects_cycles(&self) -> bool {
        self.detect_cycles
    }

    /// Checks that children of `barcode` may be placed at `next_level`.
    pub fn check_descend(&self, next_level: usize, barcode: &Barcode) -> Result<(), ResolveError> {
        if next_level > MAX_COMPOSITION_DEPTH {
            return Err(ResolveError::TooDeep {
                barcode: barcode.to_string(),
                max_depth: MAX_COMPOSITION_DEPTH,
            });
        }
        Ok(())
    }

    /// Checks that a memoized subtree of `height` levels fits when its
    /// owning node is placed at `level`.
    pub fn check_reuse(
        &self,
        level: usize,
        height: usize,
        barcode: &Barcode,
    ) -> Result<(), ResolveError> {
        let deepest = level + height.saturating_sub(1);
        if deepest > MAX_COMPOSITION_DEPTH {
            return Err(ResolveError::TooDeep {
                barcode: barcode.to_string(),
                max_depth: MAX_COMPOSITION_DEPTH,
            });
        }
        Ok(())
    }

    /// Rejects `barcode` if it is already on the active branch.
    ///
    /// No-op unless cycle detection is enabled.
    pub fn check_ancestors(
        &self,
        ancestors: &[Barcode],
        barcode: &Barcode,
    ) -> Result<(), ResolveError> {
        if !self.detect_cycles {
            return Ok(());
        }

        if let Some(start) = ancestors.iter().position(|a| a == barcode) {
            let mut path: Vec<String> = ancestors[start..].iter().map(Barcode::to_string).collect();
            path.push(barcode.to_string());
            return Err(ResolveError::CycleDetected { path });
        }
        Ok(())
    }
}
