//! Pre-ghost display attributes of a window.

use super::constants::*;

/// The layered-window triple (`color key`, `alpha`, `flags`) as reported by
/// the window manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayeredAttributes {
    pub color_key: u32,
    pub alpha: u8,
    pub flags: u32,
}

impl LayeredAttributes {
    /// Fully opaque, alpha-only attributes.
    pub const OPAQUE: LayeredAttributes = LayeredAttributes {
        color_key: 0,
        alpha: OPAQUE_ALPHA,
        flags: LWA_ALPHA,
    };

    /// Alpha-only attributes with the given alpha.
    pub fn alpha(alpha: u8) -> Self {
        Self {
            color_key: 0,
            alpha,
            flags: LWA_ALPHA,
        }
    }

    /// Whether `flags` is one of the combinations the window manager accepts
    /// back: alpha, color key, or both.
    pub fn has_restorable_flags(&self) -> bool {
        matches!(
            self.flags,
            LWA_ALPHA | LWA_COLORKEY | LWA_ALPHA_COLORKEY
        )
    }
}

/// What a window looked like right before ghost mode was first enabled on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeBackup {
    /// The window already carried `WS_EX_LAYERED`.
    pub had_layered: bool,
    /// The window already carried `WS_EX_TRANSPARENT`.
    pub had_transparent: bool,
    /// Layered attributes, if the window had any set.
    pub attributes: Option<LayeredAttributes>,
}

impl AttributeBackup {
    /// Capture a backup from the current extended style and layered
    /// attributes of a window.
    pub fn capture(ex_style: u32, attributes: Option<LayeredAttributes>) -> Self {
        Self {
            had_layered: ex_style & WS_EX_LAYERED != 0,
            had_transparent: ex_style & WS_EX_TRANSPARENT != 0,
            attributes,
        }
    }

    /// The extended style to write back, given the window's current one.
    ///
    /// Click-through is set or cleared to match the backup. Layered is only
    /// ever cleared: a window that was layered before keeps whatever it has.
    pub fn restored_ex_style(&self, current: u32) -> u32 {
        let mut ex = if self.had_transparent {
            current | WS_EX_TRANSPARENT
        } else {
            current & !WS_EX_TRANSPARENT
        };
        if !self.had_layered {
            ex &= !WS_EX_LAYERED;
        }
        ex
    }

    /// The layered attributes to apply after the style restore, if any.
    ///
    /// `still_layered` is whether the window carries `WS_EX_LAYERED` after
    /// [`restored_ex_style`](Self::restored_ex_style) was written.
    pub fn restored_attributes(&self, still_layered: bool) -> Option<LayeredAttributes> {
        match self.attributes {
            Some(attrs) if attrs.has_restorable_flags() => Some(attrs),
            _ if still_layered => Some(LayeredAttributes::OPAQUE),
            _ => None,
        }
    }
}
