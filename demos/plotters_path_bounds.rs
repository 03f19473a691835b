extern crate plotters;
use plotters::prelude::*;

extern crate pathbox;
use pathbox::{CubicBezier, Path, PathSegment, Point};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // the outline analyzed by the report binary
    let mut path: Path<4> = Path::new();
    path.push_move(Point::new(29.157, 7.334));
    path.push_cubic(CubicBezier::new(
        Point::new(29.157, 7.334),
        Point::new(19.849, -2.873),
        Point::new(5.314, 6.426),
        Point::new(1.491, 29.737),
    ));
    path.push_cubic(CubicBezier::new(
        Point::new(1.491, 29.737),
        Point::new(1.525, 29.74),
        Point::new(8.008, 21.517),
        Point::new(8.021, 21.457),
    ));
    path.push_cubic(CubicBezier::new(
        Point::new(8.021, 21.457),
        Point::new(10.16, 11.879),
        Point::new(17.483, -0.662),
        Point::new(29.157, 7.334),
    ));

    let bounds = path.bounding_box().ok_or("path draws no curves")?;
    let xmin = bounds.min_x;
    let xmax = bounds.max_x;
    let ymin = bounds.min_y;
    let ymax = bounds.max_y;

    // render the path curves to desired accuracy
    let nsteps: usize = 1000;
    let mut path_graph: Vec<(f64, f64)> = Vec::with_capacity(3 * nsteps);
    for segment in path.segments() {
        if let PathSegment::Cubic(curve) = segment {
            for t in 0..=nsteps {
                let t = t as f64 * 1f64 / (nsteps as f64);
                let p = curve.eval_casteljau(t);
                path_graph.push((p.x, p.y));
            }
        }
    }

    let root = BitMapBackend::new("path_bounding_box.png", (640, 480)).into_drawing_area();
    root.fill(&WHITE)?;

    // setup the chart, a bit bigger than the bounding box
    let mut chart = ChartBuilder::on(&root)
        .caption("Cubic Bezier Path", ("sans-serif", 21).into_font())
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d((xmin - 2.0)..(xmax + 2.0), (ymin - 2.0)..(ymax + 2.0))?;

    chart.configure_mesh().draw()?;

    // draw the path curves
    chart
        .draw_series(LineSeries::new(path_graph, &RED))?
        .label("path")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    // draw the bounding box
    chart
        .draw_series(
            AreaSeries::new(
                vec![
                    (xmin, ymin),
                    (xmin, ymax),
                    (xmax, ymax),
                    (xmax, ymin),
                    (xmin, ymin),
                ],
                0.0,
                GREEN.mix(0.05),
            )
            .border_style(GREEN),
        )?
        .label("Bounding Box")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GREEN));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}
