use pixmatch::{
    process_image, AverageGray, LumaGray, PerceptualGray, PixelMatrix, PixelTransform, Point,
    Preset, Rgba, Sunset, TransformChain,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_image(rng: &mut StdRng, width: usize, height: usize) -> PixelMatrix {
    PixelMatrix::from_fn(width, height, |_| {
        Rgba::new(rng.random(), rng.random(), rng.random(), rng.random())
    })
    .unwrap()
}

fn assert_gray(matrix: &PixelMatrix, source: &PixelMatrix) {
    for (out, src) in matrix.pixels().iter().zip(source.pixels()) {
        assert_eq!(out.r, out.g);
        assert_eq!(out.g, out.b);
        assert_eq!(out.a, src.a);
    }
}

#[test]
fn grayscale_presets_equalize_color_channels() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let source = random_image(&mut rng, 17, 11);

    let presets: [&dyn PixelTransform; 3] = [&LumaGray, &PerceptualGray, &AverageGray];
    for preset in presets {
        let out = process_image(&source, preset).unwrap();
        assert_gray(&out, &source);
    }
}

#[test]
fn named_presets_match_their_types() {
    let mut rng = StdRng::seed_from_u64(42);
    let source = random_image(&mut rng, 6, 5);

    let cases: [(Preset, &dyn PixelTransform); 4] = [
        (Preset::LumaGray, &LumaGray),
        (Preset::PerceptualGray, &PerceptualGray),
        (Preset::AverageGray, &AverageGray),
        (Preset::Sunset(0.0), &Sunset::new(0.7)),
    ];
    for (preset, expected) in cases {
        let boxed = preset.transform();
        let a = process_image(&source, boxed.as_ref()).unwrap();
        let b = process_image(&source, expected).unwrap();
        assert_eq!(a, b, "{preset:?}");
    }
}

#[test]
fn sunset_keeps_blue_and_alpha() {
    let mut rng = StdRng::seed_from_u64(9);
    let source = random_image(&mut rng, 8, 8);
    let out = process_image(&source, &Sunset::default()).unwrap();
    for (o, s) in out.pixels().iter().zip(source.pixels()) {
        assert_eq!(o.b, s.b);
        assert_eq!(o.a, s.a);
        assert_eq!(o.r, (f64::from(s.r) * 0.7) as u8);
        assert_eq!(o.g, (f64::from(s.g) * 0.7) as u8);
    }
}

#[test]
fn transforms_are_reusable_and_deterministic() {
    let mut rng = StdRng::seed_from_u64(3);
    let source = random_image(&mut rng, 9, 4);
    let chain = TransformChain::new().then(Sunset::new(0.9)).then(PerceptualGray);

    let first = process_image(&source, &chain).unwrap();
    let second = process_image(&source, &chain).unwrap();
    assert_eq!(first, second);
    assert_gray(&first, &source);
}

#[test]
fn closures_see_their_coordinates() {
    let mut m = PixelMatrix::new(4, 3).unwrap();
    let offset = 10u8;
    m.process(&move |p: Point, px: Rgba| {
        Rgba::new(p.x as u8 + offset, p.y as u8 + offset, px.b, 255)
    });
    assert_eq!(m.at(3, 2), Rgba::new(13, 12, 0, 255));
    assert_eq!(m.at(0, 0), Rgba::new(10, 10, 0, 255));
}
