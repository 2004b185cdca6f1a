use std::path::Path;

use console::Style;
use wallview_core::layout::TileLayout;
use wallview_core::visualizer::Visualizer;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_layout_summary(visualizer: &Visualizer, image: Option<&Path>) {
    let s = Styles::new();
    let wall = visualizer.wall();
    let (stage_w, stage_h) = visualizer.stage_size();

    println!();
    println!("  {}", s.title.apply_to("Wallview Layout"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(15)));
    println!();

    if let Some(path) = image {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Wallpaper"),
            s.path.apply_to(path.display())
        );
    }
    if let Some(size) = visualizer.image() {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Bitmap"),
            s.value.apply_to(format!("{}x{} px", size.width, size.height))
        );
    }
    println!(
        "  {:<14}{}",
        s.label.apply_to("Wall"),
        s.value.apply_to(format!("{} x {} cm", wall.width, wall.height))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Stage"),
        s.value.apply_to(format!("{stage_w} x {stage_h}"))
    );
    println!();

    let layout = visualizer.layout();
    if layout.is_empty() {
        println!(
            "  {:<14}{}",
            s.header.apply_to("Tiles"),
            s.disabled.apply_to("none (empty viewport)")
        );
        println!();
        return;
    }

    println!("  {}", s.header.apply_to("Tiling"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Scale"),
        s.value.apply_to(format!("{:.4}", layout.scale))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Tile width"),
        s.value.apply_to(format!("{:.2}", layout.tile_width))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Visible"),
        s.value.apply_to(format!("{:.2}", layout.visible_width))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Tiles"),
        s.value.apply_to(layout.repetitions)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Pan"),
        s.value.apply_to(format!(
            "{:.2} (max \u{00b1}{:.2})",
            visualizer.pan_offset(),
            visualizer.pan_bound().unwrap_or(0.0)
        ))
    );
    println!();
}

pub fn print_tiles(layout: &TileLayout) {
    let s = Styles::new();
    if layout.is_empty() {
        return;
    }

    println!("  {}", s.header.apply_to("Tiles"));
    for (i, tile) in layout.tiles.iter().enumerate() {
        println!(
            "    {:>3}  x={:>10.2}  y={:>6.2}  w={:>9.2}  h={:>8.2}",
            s.label.apply_to(i),
            tile.x,
            tile.y,
            tile.width,
            tile.height
        );
    }
    println!();
}
