//! Chart a random walk as SVG.
//!
//! This maps a sequence of random samples into a chart, and outputs an HTML
//! page with the smooth line, its fill, the grid and the sample dots.

use rand::distributions::{Distribution, Uniform};

use linecurve::{grid_lines, ChartLayout, Sample};

fn main() {
    let mut rng = rand::thread_rng();
    const N: usize = 24;
    let step = Uniform::from(-10.0..10.0);
    let mut value = 50.0;
    let samples = (0..N)
        .map(|i| {
            value += step.sample(&mut rng);
            Sample::new(value, i as i64 * 3600)
        })
        .collect::<Vec<_>>();

    let layout = ChartLayout {
        curved: true,
        ..ChartLayout::new(600.0, 300.0)
    };
    let paths = match layout.chart_paths(&samples) {
        Ok(paths) => paths,
        Err(e) => {
            eprintln!("can't chart samples: {}", e);
            std::process::exit(1);
        }
    };
    let top = layout.top_space;
    println!(
        r##"<!DOCTYPE html>
<html>
    <body>
    <svg height="{}" width="{}">
      <g transform="translate(0 {})">
      <path d="{}" fill="#9cf" stroke="none" />
      <path d="{}" fill="none" stroke="#000" />"##,
        layout.height,
        layout.width,
        top,
        paths.fill.to_svg(),
        paths.stroke.to_svg()
    );
    for line in grid_lines(&layout, &samples) {
        let dash = if line.dashed { r#" stroke-dasharray="4 4""# } else { "" };
        println!(
            r##"      <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="#478abb" stroke-width="0.5"{} />
      <text x="4" y="{}" font-size="12" fill="#80adce">{}</text>"##,
            line.line.p0.x,
            line.y,
            line.line.p1.x,
            line.y,
            dash,
            line.y + 12.0,
            line.label
        );
    }
    for pt in &paths.points {
        println!(
            r#"      <circle cx="{}" cy="{}" r="3" fill="blue" />"#,
            pt.x, pt.y
        )
    }
    println!(
        r#"      </g>
    </svg>
    </body>
</html>"#
    );
}
