use genegrid::config::{LayoutConfig, PaletteConfig};
use genegrid::model::Pedigree;
use genegrid::render::DiagramLayout;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn layout_for(num_generations: u32) -> DiagramLayout {
    let palette = PaletteConfig::default();
    let mut rng = StdRng::seed_from_u64(1);
    let pedigree = Pedigree::build(num_generations, &palette, &mut rng).unwrap();
    DiagramLayout::compute(&pedigree, &LayoutConfig::default())
}

#[test]
fn test_founder_row_is_centred_with_fixed_step() {
    // Defaults: block 80, spacing 120, canvas 1400. Four founders span
    // 4 * 200 = 800, so the row starts at (1400 - 800) / 2 = 300.
    let layout = layout_for(3);
    let founders = &layout.positions()[0];

    let xs: Vec<f64> = founders.iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![300.0, 500.0, 700.0, 900.0]);
    assert!(founders.iter().all(|p| p.y == 50.0));
}

#[test]
fn test_generations_descend_with_fixed_vertical_step() {
    let layout = layout_for(4);
    let ys: Vec<f64> = layout.positions().iter().map(|row| row[0].y).collect();
    assert_eq!(ys, vec![50.0, 270.0, 490.0, 710.0]);
}

#[test]
fn test_children_sit_at_their_parents_midpoint() {
    let layout = layout_for(3);
    let block = LayoutConfig::default().block_size;

    for g in 1..layout.positions().len() {
        for (i, child) in layout.positions()[g].iter().enumerate() {
            let a = layout.position(g - 1, 2 * i);
            let b = layout.position(g - 1, 2 * i + 1);

            // Child centre == midpoint of the parents' centres.
            let parents_mid = ((a.x + block / 2.0) + (b.x + block / 2.0)) / 2.0;
            assert!((child.x + block / 2.0 - parents_mid).abs() < 1e-9);
        }
    }
}

#[test]
fn test_connector_drop_aligns_with_the_child() {
    let layout = layout_for(3);
    let block = LayoutConfig::default().block_size;

    // One connector per couple: two couples in generation 0, one above the
    // root child.
    assert_eq!(layout.connectors().len(), 3);

    let mut connectors = layout.connectors().iter();
    for g in 1..layout.positions().len() {
        for (i, child) in layout.positions()[g].iter().enumerate() {
            let c = connectors.next().unwrap();
            let a = layout.position(g - 1, 2 * i);
            let b = layout.position(g - 1, 2 * i + 1);

            // Horizontal segment joins the facing edges at mid-block height.
            assert_eq!(c.left_x, a.x + block);
            assert_eq!(c.right_x, b.x);
            assert_eq!(c.couple_y, a.y + block / 2.0);

            // Vertical segment runs at the parents' midpoint, down to the
            // child's top edge.
            assert!((c.drop_x - (child.x + block / 2.0)).abs() < 1e-9);
            assert_eq!(c.child_top_y, child.y);
        }
    }
}

#[test]
fn test_known_three_generation_coordinates() {
    // Worked example with the default metrics:
    //   founders at x = 300, 500, 700, 900
    //   children   at x = (300+500+80)/2 - 40 = 400 and 800
    //   root       at x = (400+800+80)/2 - 40 = 600
    let layout = layout_for(3);

    assert_eq!(layout.position(1, 0).x, 400.0);
    assert_eq!(layout.position(1, 1).x, 800.0);
    assert_eq!(layout.position(2, 0).x, 600.0);
}
