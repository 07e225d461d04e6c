use genegrid::config::{AppConfig, PaletteConfig};
use genegrid::model::Pedigree;
use genegrid::render::Renderer;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn render(num_generations: u32, seed: u64) -> String {
    let config = AppConfig::default();
    let mut rng = StdRng::seed_from_u64(seed);
    let pedigree = Pedigree::build(num_generations, &config.palette, &mut rng).unwrap();
    Renderer::new(config.layout).render(&pedigree).unwrap()
}

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

fn fills(svg: &str) -> Vec<&str> {
    svg.split("fill=\"")
        .skip(1)
        .map(|rest| rest.split('"').next().unwrap())
        .collect()
}

#[test]
fn test_document_envelope_and_view_box() {
    let svg = render(2, 1);
    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
    assert!(svg.contains("viewBox=\"-200 -50 1800 600\""));
    assert!(svg.ends_with("</svg>"));

    // Height scales with the generation count.
    assert!(render(3, 1).contains("viewBox=\"-200 -50 1800 900\""));
    assert!(render(4, 1).contains("viewBox=\"-200 -50 1800 1200\""));
}

#[test]
fn test_defs_hold_the_grid_pattern() {
    let svg = render(2, 1);
    assert!(svg.contains("<defs><pattern id=\"grid8x8\" width=\"80\" height=\"80\""));

    // Seven vertical and seven horizontal separator strokes in the tile.
    assert!(svg.contains("M 10,0 L 10,80"));
    assert!(svg.contains("M 70,0 L 70,80"));
    assert!(svg.contains("M 0,10 L 80,10"));
    assert!(svg.contains("M 0,70 L 80,70"));
}

#[test]
fn test_two_generation_element_inventory() {
    let svg = render(2, 1);

    // Three individuals: a couple and their child.
    assert_eq!(count(&svg, "<g transform=\"translate("), 3);
    // Each group: one background rect plus 64 cell rects.
    assert_eq!(count(&svg, "<rect"), 3 * 65);
    // Each group carries 14 separator lines.
    assert_eq!(count(&svg, "<line"), 3 * 14);
    // One pattern path plus two connector strokes.
    assert_eq!(count(&svg, "<path"), 3);
}

#[test]
fn test_two_generation_positions_and_connectors() {
    let svg = render(2, 1);

    // Founders centred at x = 500 and 700, child midway at x = 600.
    assert!(svg.contains("<g transform=\"translate(500,50)\""));
    assert!(svg.contains("<g transform=\"translate(700,50)\""));
    assert!(svg.contains("<g transform=\"translate(600,270)\""));

    // Couple stroke joins the facing edges at mid-block height; the drop
    // runs from its midpoint to the child's top edge.
    assert!(svg.contains("<path d=\"M 580,90 L 700,90\""));
    assert!(svg.contains("<path d=\"M 640,90 L 640,270\""));
}

#[test]
fn test_no_out_of_palette_colours_appear() {
    // N=2 with the default palette uses only pair 0: black and white. The
    // only other fill values are the white backgrounds and "none".
    let svg = render(2, 9);
    for fill in fills(&svg) {
        assert!(
            fill == "black" || fill == "white" || fill == "none",
            "unexpected fill colour: {}",
            fill
        );
    }
}

#[test]
fn test_four_generation_diagram_renders_every_individual() {
    let svg = render(4, 3);

    // 8 + 4 + 2 + 1 individuals.
    assert_eq!(count(&svg, "<g transform=\"translate("), 15);
    // Seven couples, two strokes each, plus the pattern path.
    assert_eq!(count(&svg, "<path"), 15);

    // Eight founders span 8 * 200 = 1600, so the row starts at
    // (1400 - 1600) / 2 = -100, still inside the viewBox margin.
    assert!(svg.contains("<g transform=\"translate(-100,50)\""));
}

#[test]
fn test_configured_colour_tokens_are_escaped_in_attributes() {
    // Palette colours arrive from a user-editable config file, so a token
    // carrying attribute delimiters must not break the document.
    let config = AppConfig::default();
    let palette = PaletteConfig {
        pairs: vec![("bad\"colour".to_string(), "a&b<c".to_string())],
    };
    let mut rng = StdRng::seed_from_u64(0);
    let pedigree = Pedigree::build(2, &palette, &mut rng).unwrap();
    let svg = Renderer::new(config.layout).render(&pedigree).unwrap();

    assert!(svg.contains("fill=\"bad&quot;colour\""));
    assert!(svg.contains("fill=\"a&amp;b&lt;c\""));
    assert!(!svg.contains("fill=\"bad\"colour\""));
    assert!(svg.ends_with("</svg>"));
}

#[test]
fn test_undersized_palette_fails_before_rendering() {
    let palette = PaletteConfig {
        pairs: vec![("black".to_string(), "white".to_string())],
    };
    let mut rng = StdRng::seed_from_u64(0);
    assert!(Pedigree::build(4, &palette, &mut rng).is_err());
}
