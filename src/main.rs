use pathbox::{report, CubicBezier, Path, Point};

// Path data of the analyzed outline:
// M 29.157 7.334
// C 19.849 -2.873 5.314 6.426 1.491 29.737
// C 1.525 29.74 8.008 21.517 8.021 21.457
// C 10.16 11.879 17.483 -0.662 29.157 7.334 Z
// The last curve returns to the start point, so the Z command adds nothing.
fn outline() -> Path<4> {
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
    path
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = outline();

    let mut out = String::new();
    report::write_analysis(&mut out, &path)?;
    print!("{}", out);

    Ok(())
}
