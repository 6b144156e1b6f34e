use carousel_gen::render::{render_series, PdfRenderer};
use carousel_gen::{colours, Colour, Font, FontBook, FontSpec, PaginationConfig, Paginator, Px};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("carousel_gen=debug")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = std::env::args().skip(1);
    let Some(font_path) = args.next() else {
        eprintln!("usage: carousel <font.ttf> [output dir]");
        std::process::exit(1);
    };
    let out_dir = args.next().unwrap_or_else(|| "carousel".to_string());

    let mut fonts = FontBook::new();
    let id = fonts.add_font(Font::load_from_disk(&font_path).expect("can load font"));
    fonts.alias("body", id);

    let config = PaginationConfig::new(Px(1080), Px(90), FontSpec::new("body", 44.0))
        .expect("valid config")
        .with_middle_byline("swipe for more")
        .with_end_byline("lorem ipsum, probably");

    let body = lipsum::lipsum(300);
    let frames = Paginator::cached(&fonts)
        .paginate(&body, &config)
        .expect("can paginate");

    let renderer = PdfRenderer::new(&fonts)
        .with_background(Colour::from_hex("#1d2021").unwrap_or(colours::BLACK))
        .with_foreground(colours::WHITE);
    let paths = render_series(&renderer, &frames, &out_dir, "frame").expect("can render");

    for (frame, path) in frames.iter().zip(&paths) {
        println!(
            "{}: {} words, \"{}\"",
            path.display(),
            frame.words().count(),
            frame.caption()
        );
    }
}
