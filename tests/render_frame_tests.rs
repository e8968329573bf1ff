use range_seek::api::{RangeSelector, RangeSelectorConfig};
use range_seek::core::PixelSpan;
use range_seek::render::{NullRenderer, RegionRole, TextHAlign};
use range_seek::scheduler::ManualScheduler;

fn fixed_selector() -> RangeSelector<ManualScheduler> {
    let config = RangeSelectorConfig::new(232).with_weights(100, 50);
    RangeSelector::new(ManualScheduler::new(), config).expect("selector init")
}

#[test]
fn frame_is_empty_until_range_is_set() {
    let selector = fixed_selector();
    let frame = selector.build_frame();

    assert!(frame.is_empty());
    assert_eq!(frame.track_width_px, 232);

    let mut renderer = NullRenderer::default();
    selector.render(&mut renderer).expect("render empty frame");
    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_rect_count, 0);
}

#[test]
fn frame_carries_all_regions_and_labels() {
    let mut selector = fixed_selector();
    selector.set_range_time(0, 10_000).expect("set range");

    let frame = selector.build_frame();
    assert_eq!(frame.rects.len(), 4);
    let span = |role| frame.rect(role).expect("region present").span;
    assert_eq!(span(RegionRole::LeftHandle), PixelSpan::new(86, 102));
    assert_eq!(span(RegionRole::Central), PixelSpan::new(102, 202));
    assert_eq!(span(RegionRole::RightHandle), PixelSpan::new(202, 218));
    assert_eq!(span(RegionRole::Progress), PixelSpan::new(96, 109));

    assert_eq!(frame.texts.len(), 2);
    assert_eq!(frame.texts[0].text, "00:00");
    assert_eq!(frame.texts[0].x, 102);
    assert_eq!(frame.texts[0].h_align, TextHAlign::Right);
    assert_eq!(frame.texts[1].text, "00:10");
    assert_eq!(frame.texts[1].x, 202);
    assert_eq!(frame.texts[1].h_align, TextHAlign::Left);
}

#[test]
fn labels_follow_dragged_handles() {
    let mut selector = fixed_selector();
    selector.set_range_time(0, 7_200_000).expect("two hours");

    selector.pointer_down(90);
    selector.pointer_move(140);
    selector.pointer_up(140);

    let frame = selector.build_frame();
    let left = selector.left_time().expect("left time");
    assert_eq!(left, 3_600_000);
    assert_eq!(frame.texts[0].text, "01:00:00");
    assert_eq!(frame.texts[1].text, "02:00:00");
    assert_eq!(frame.texts[0].x, 152);
    assert_eq!(
        frame.rect(RegionRole::Central).expect("central").span,
        PixelSpan::new(152, 202)
    );
}

#[test]
fn null_renderer_counts_primitives() {
    let mut selector = fixed_selector();
    selector.set_range_time(0, 10_000).expect("set range");

    let mut renderer = NullRenderer::default();
    selector.render(&mut renderer).expect("render");
    selector.render(&mut renderer).expect("render again");

    assert_eq!(renderer.frames_rendered, 2);
    assert_eq!(renderer.last_rect_count, 4);
    assert_eq!(renderer.last_text_count, 2);
}
