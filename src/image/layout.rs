//! Axis layout detection for raw image tensors.

use strum::Display;

/// Where the channel axis sits in a raw image tensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ImageLayout {
    /// (H, W), a single luminance plane.
    Planar,
    /// (C, H, W).
    ChannelsFirst,
    /// (H, W, C).
    ChannelsLast,
}

/// Channel counts that mark an axis as a plausible channel axis.
const CHANNEL_COUNTS: [usize; 3] = [1, 3, 4];

/// Guess the layout of a tensor from its shape alone.
///
/// A rank-3 tensor whose first axis has 1, 3 or 4 entries is taken as
/// channels-first. This wins over the last axis, so a 3x3x3 tensor (or a
/// 4-row RGB image such as (4, W, 3)) is read as channels-first. There is no
/// metadata to disambiguate these cases; callers that know their layout
/// should hand over channels-last data whose height is not 1, 3 or 4.
///
/// Returns `None` for any rank other than 2 or 3.
pub fn resolve_layout(shape: &[usize]) -> Option<ImageLayout> {
    match shape {
        [_, _] => Some(ImageLayout::Planar),
        [first, _, _] if CHANNEL_COUNTS.contains(first) => Some(ImageLayout::ChannelsFirst),
        [_, _, _] => Some(ImageLayout::ChannelsLast),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_dimensions_are_planar() {
        assert_eq!(resolve_layout(&[8, 5]), Some(ImageLayout::Planar));
    }

    #[test]
    fn small_leading_axis_is_channels_first() {
        assert_eq!(resolve_layout(&[3, 16, 16]), Some(ImageLayout::ChannelsFirst));
        assert_eq!(resolve_layout(&[1, 16, 16]), Some(ImageLayout::ChannelsFirst));
        assert_eq!(resolve_layout(&[4, 16, 16]), Some(ImageLayout::ChannelsFirst));
    }

    #[test]
    fn large_leading_axis_is_channels_last() {
        assert_eq!(resolve_layout(&[16, 16, 3]), Some(ImageLayout::ChannelsLast));
        assert_eq!(resolve_layout(&[16, 16, 7]), Some(ImageLayout::ChannelsLast));
    }

    #[test]
    fn ambiguous_cube_resolves_channels_first() {
        assert_eq!(resolve_layout(&[3, 3, 3]), Some(ImageLayout::ChannelsFirst));
        assert_eq!(resolve_layout(&[4, 10, 3]), Some(ImageLayout::ChannelsFirst));
    }

    #[test]
    fn other_ranks_are_unresolved() {
        assert_eq!(resolve_layout(&[]), None);
        assert_eq!(resolve_layout(&[12]), None);
        assert_eq!(resolve_layout(&[2, 8, 8, 3]), None);
    }

    #[test]
    fn layout_display_is_snake_case() {
        assert_eq!(ImageLayout::ChannelsFirst.to_string(), "channels_first");
    }
}
