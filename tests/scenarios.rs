use carousel_gen::{
    layout, measurer_fn, paginate, Error, Extent, FontBook, FontSpec, MeasurementError,
    PaginationConfig, Paginator, Px,
};
use pretty_assertions::assert_eq;

fn config() -> PaginationConfig {
    PaginationConfig::new(Px(1000), Px(50), FontSpec::new("Crimson Pro", 32.0))
        .expect("valid config")
        .with_middle_byline("keep swiping")
        .with_end_byline("fin.")
}

fn short_words(n: usize) -> String {
    lipsum::lipsum_words(n)
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| !w.is_empty())
        .take(n)
        .collect::<Vec<_>>()
        .join(" ")
}

fn numbered_words(n: usize) -> String {
    (1..=n).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ")
}

#[test]
fn body_that_fits_is_one_frame() {
    let body = short_words(50);
    let fits = measurer_fn(|_, _, _| Ok(Extent::new(850, 600)));

    let frames = paginate(&body, &config(), &fits).unwrap();

    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].body_text(), body);
    assert_eq!(frames[0].caption(), "fin.");
}

#[test]
fn new_frame_every_ten_words() {
    // ten words measure 630px tall, exactly the budget; eleven are over it
    let by_words = measurer_fn(|text, _, _| {
        let words = layout::words(text).count() as u32;
        Ok(Extent::new(100, words * 63))
    });

    for n in [11, 20, 47, 50, 101] {
        let body = numbered_words(n);
        let frames = paginate(&body, &config(), &by_words).unwrap();

        assert_eq!(frames.len(), n.div_ceil(10), "{n} words");
        let (last, rest) = frames.split_last().unwrap();
        assert!(rest.iter().all(|f| f.caption() == "keep swiping"));
        assert_eq!(last.caption(), "fin.");
        assert!(rest.iter().all(|f| f.words().count() == 10));
        assert_eq!(frames.words().collect::<Vec<_>>(), body.split(' ').collect::<Vec<_>>());
    }
}

#[test]
fn line_breaks_without_new_frames() {
    // any line that ends up holding "wide" along with other words is too wide
    let measurer = measurer_fn(|text, width, _| {
        let too_wide = text
            .split(layout::LINE_BREAK)
            .any(|line| line.contains("wide") && line.split(' ').count() > 1);
        Ok(Extent {
            width: if too_wide { width } else { Px(100) },
            height: Px(10),
        })
    });
    let body = "a few words then wide and more words then wide again";

    let frames = paginate(body, &config(), &measurer).unwrap();

    assert_eq!(frames.len(), 1);
    assert_eq!(
        frames[0].lines().collect::<Vec<_>>(),
        vec!["a few words then", "wide", "and more words then", "wide", "again"]
    );
    assert_eq!(frames[0].caption(), "fin.");
}

#[test]
fn empty_body_is_a_single_empty_frame() {
    let frames = Paginator::new(&FontBook::new()).paginate("", &config()).unwrap();

    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].body_text(), "");
    assert_eq!(frames[0].caption(), "fin.");
}

#[test]
fn unknown_fonts_abort_pagination() {
    let err = Paginator::new(&FontBook::new())
        .paginate("no fonts are loaded", &config())
        .unwrap_err();

    match err {
        Error::Measurement(MeasurementError::UnknownFontFamily(family)) => {
            assert_eq!(family, "Crimson Pro")
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn long_prose_wraps_and_splits() {
    // a crude proportional font: 18px per character, 40px lines
    let measurer = measurer_fn(|text, width, _| {
        let lines = layout::wrap_lines(text, width.as_f32(), |s| s.len() as f32 * 18.0);
        let widest = lines.iter().map(|l| l.width).fold(0.0_f32, f32::max);
        Ok(Extent {
            width: Px::ceil(widest),
            height: Px(lines.len() as u32 * 40),
        })
    });
    let body = lipsum::lipsum(400);

    let frames = Paginator::cached(measurer).paginate(&body, &config()).unwrap();

    assert!(frames.len() > 1);
    assert_eq!(
        frames.words().collect::<Vec<_>>(),
        body.split(' ').filter(|w| !w.is_empty()).collect::<Vec<_>>()
    );
    // 630px of 40px lines is 15 lines
    for frame in frames.iter() {
        let lines = layout::wrap_lines(frame.body_text(), 900.0, |s| s.len() as f32 * 18.0);
        assert!(lines.len() <= 15);
    }
}
