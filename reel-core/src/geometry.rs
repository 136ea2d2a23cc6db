//! Pixel geometry for the item ribbon.
//!
//! Items are laid out once as a single fixed-order ribbon; paging only changes
//! the ribbon's horizontal translation. The item width leaves room for a 30%
//! preview slice at each edge of the window.

use reel_model::{DisplayItem, ImageVariant};

use crate::breakpoint::resolve_breakpoint;
use crate::constants::{image, preview};

/// Width of one item (px).
///
/// Reserves the container padding once, the gaps between the main items and,
/// when there is overflow to preview, one extra gap per edge. What is left is
/// shared by `items_per_page` full items plus the two edge previews.
///
/// Narrow viewports produce zero or negative widths; those are returned as is
/// and callers render them as zero-width.
pub fn calculate_item_width(
    viewport_width: f64,
    container_padding: f64,
    item_gap: f64,
    items_per_page: usize,
    has_overflow: bool,
) -> f64 {
    if items_per_page == 0 {
        return 0.0;
    }

    let main_item_gaps = item_gap * (items_per_page - 1) as f64;
    let preview_gaps = if has_overflow { item_gap * 2.0 } else { 0.0 };
    let available =
        viewport_width - container_padding - main_item_gaps - preview_gaps;

    available / (items_per_page as f64 + preview::SHARE)
}

/// Horizontal ribbon offset (px, zero or negative) for an anchor position.
///
/// The first page sits flush left. Any later anchor leaves a preview slice of
/// the previous item visible on the left edge. Once the window cannot advance
/// any further the offset is clamped so the last item's trailing edge sits at
/// `viewport_width - container_padding` and never further left.
pub fn calculate_translate_x(
    anchor_index: usize,
    item_width: f64,
    item_gap: f64,
    items_per_page: usize,
    item_count: usize,
    container_padding: f64,
    viewport_width: f64,
) -> f64 {
    if anchor_index == 0 {
        return 0.0;
    }

    let item_and_gap = item_width + item_gap;
    let base_translation = anchor_index as f64 * item_and_gap;
    let left_preview_offset = item_width * preview::FRACTION + item_gap;
    let standard_translation = -(base_translation - left_preview_offset);

    let can_advance =
        items_per_page > 0 && anchor_index + items_per_page < item_count;
    if can_advance {
        return standard_translation;
    }

    let right_edge = viewport_width - container_padding;
    let last_item_end = item_count as f64 * item_and_gap - item_gap;
    let right_align_translation = right_edge - last_item_end;

    standard_translation.max(right_align_translation)
}

/// Rendition to load for a viewport width.
pub fn image_variant_for(viewport_width: f64) -> ImageVariant {
    if viewport_width < image::SMALL_BELOW_PX {
        ImageVariant::Small
    } else {
        ImageVariant::Large
    }
}

/// URL of the rendition `item` should load at `viewport_width`.
pub fn image_url(item: &DisplayItem, viewport_width: f64) -> &str {
    item.images.url(image_variant_for(viewport_width))
}

/// `sizes` hint for responsive images, matching the main item width of the
/// breakpoint the viewport resolves to.
pub fn image_sizes(viewport_width: f64) -> String {
    let breakpoint = resolve_breakpoint(viewport_width);
    let gaps = breakpoint.item_gap
        * breakpoint.items_per_page.saturating_sub(1) as f64;
    format!(
        "calc((100vw - {}px - {}px) / {})",
        css_number(breakpoint.container_padding),
        css_number(gaps),
        breakpoint.items_per_page
    )
}

/// Format a pixel quantity as `"<n>px"`.
pub fn css_px(value: f64) -> String {
    format!("{}px", css_number(value))
}

/// Format a ribbon offset as `"translateX(<n>px)"`.
pub fn css_translate_x(value: f64) -> String {
    format!("translateX({}px)", css_number(value))
}

/// Viewport width safe to lay out against: non-finite and negative inputs
/// become 0.
pub(crate) fn sanitize_width(viewport_width: f64) -> f64 {
    if viewport_width.is_finite() {
        viewport_width.max(0.0)
    } else {
        0.0
    }
}

fn css_number(value: f64) -> String {
    // -0 prints as "-0"
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value}")
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn item_width_reserves_preview_gaps_only_with_overflow() {
        // 1280px -> 6 items, 64px padding, 12px gap
        let with = calculate_item_width(1280.0, 64.0, 12.0, 6, true);
        let without = calculate_item_width(1280.0, 64.0, 12.0, 6, false);
        assert!((with - (1280.0 - 64.0 - 60.0 - 24.0) / 6.6).abs() < EPS);
        assert!((without - (1280.0 - 64.0 - 60.0) / 6.6).abs() < EPS);
    }

    #[test]
    fn item_width_tolerates_degenerate_inputs() {
        assert!(calculate_item_width(20.0, 32.0, 4.0, 2, true) < 0.0);
        assert_eq!(calculate_item_width(1280.0, 64.0, 12.0, 0, false), 0.0);
    }

    #[test]
    fn first_page_is_flush_left() {
        assert_eq!(
            calculate_translate_x(0, 171.5, 12.0, 6, 10, 64.0, 1280.0),
            0.0
        );
    }

    #[test]
    fn middle_anchor_keeps_left_preview_slice() {
        let w = 100.0;
        let gap = 10.0;
        let tx = calculate_translate_x(2, w, gap, 3, 10, 64.0, 1000.0);
        let expected = -(2.0 * (w + gap) - (w * 0.3 + gap));
        assert!((tx - expected).abs() < EPS);
    }

    #[test]
    fn final_anchor_is_clamped_to_right_alignment() {
        let viewport = 1280.0;
        let (padding, gap, per_page, count) = (64.0, 12.0, 6, 10);
        let w = calculate_item_width(viewport, padding, gap, per_page, true);
        let last_anchor = count - per_page;

        let tx = calculate_translate_x(
            last_anchor,
            w,
            gap,
            per_page,
            count,
            padding,
            viewport,
        );
        let standard =
            -(last_anchor as f64 * (w + gap) - (w * 0.3 + gap));
        let right_align =
            viewport - padding - (count as f64 * (w + gap) - gap);

        assert!(tx >= standard);
        assert!((tx - right_align).abs() < EPS);

        let previous = calculate_translate_x(
            last_anchor - 1,
            w,
            gap,
            per_page,
            count,
            padding,
            viewport,
        );
        assert!(tx <= previous);
    }

    #[test]
    fn image_threshold_differs_from_layout_breakpoints() {
        assert_eq!(image_variant_for(959.0), ImageVariant::Small);
        assert_eq!(image_variant_for(960.0), ImageVariant::Large);
        // 800px is already a three-item layout but still gets small images
        assert_eq!(resolve_breakpoint(800.0).items_per_page, 3);
        assert_eq!(image_variant_for(800.0), ImageVariant::Small);
    }

    #[test]
    fn image_sizes_follow_resolved_breakpoint() {
        assert_eq!(image_sizes(2000.0), "calc((100vw - 64px - 72px) / 7)");
        assert_eq!(image_sizes(500.0), "calc((100vw - 32px - 4px) / 2)");
    }

    #[test]
    fn css_formatting() {
        assert_eq!(css_px(171.5), "171.5px");
        assert_eq!(css_px(64.0), "64px");
        assert_eq!(css_translate_x(-0.0), "translateX(0px)");
        assert_eq!(css_translate_x(-607.25), "translateX(-607.25px)");
    }
}
