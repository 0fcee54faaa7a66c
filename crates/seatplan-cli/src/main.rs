use std::{error::Error, fs, path::Path};

use clap::Parser;
use seatplan::core::{FloorImage, PixelPt, Pt2, Room, ScaleCalibration, ScaleOrientation};
use seatplan::pipeline::{solve_seating, SeatingConfig, SeatingReport};
use serde::{Deserialize, Serialize};

/// Seating CLI: selects the largest distancing-compliant seat subset for a
/// room described in JSON.
#[derive(Debug, Parser)]
#[command(author, version, about = "Socially-distanced seating solver")]
struct Args {
    /// Path to a JSON file containing a RoomDescription.
    #[arg(long)]
    room: String,

    /// Path to the floor-plan raster image.
    #[arg(long)]
    floor: String,

    /// Optional path to a JSON SeatingConfig. Defaults are used if omitted.
    #[arg(long)]
    config: Option<String>,
}

/// Calibration segment of the room diagram.
#[derive(Debug, Serialize, Deserialize)]
struct ScaleDescription {
    point_a: [i32; 2],
    point_b: [i32; 2],
    orientation: ScaleOrientation,
    scale_length_units: f64,
    units_to_distance: f64,
}

/// One chair appearance: its bounding rectangle in the floor image and its
/// outline in rectangle-local coordinates.
#[derive(Debug, Serialize, Deserialize)]
struct ChairDescription {
    rect_a: [i32; 2],
    rect_b: [i32; 2],
    outline: Vec<[i32; 2]>,
}

/// One candidate seat: a chair (by index into `chairs`) and its anchor.
#[derive(Debug, Serialize, Deserialize)]
struct PlacementDescription {
    chair: usize,
    anchor: [f64; 2],
}

/// Input description of a room. This is not a persistence format: it only
/// carries the geometry the annotation collaborators would hand the core.
#[derive(Debug, Serialize, Deserialize)]
struct RoomDescription {
    scale: ScaleDescription,
    chairs: Vec<ChairDescription>,
    placements: Vec<PlacementDescription>,
}

fn pixel(p: [i32; 2]) -> PixelPt {
    PixelPt::new(p[0], p[1])
}

fn load_json_file<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, Box<dyn Error>> {
    let data = fs::read_to_string(path)?;
    let value = serde_json::from_str(&data)?;
    Ok(value)
}

fn build_room(desc: &RoomDescription, floor: &FloorImage) -> Result<Room, Box<dyn Error>> {
    let mut room = Room::new();
    room.set_scale(ScaleCalibration::new(
        pixel(desc.scale.point_a),
        pixel(desc.scale.point_b),
        desc.scale.units_to_distance,
        desc.scale.orientation,
        desc.scale.scale_length_units,
    )?);

    let mut chairs = Vec::with_capacity(desc.chairs.len());
    for chair in &desc.chairs {
        let orientation = room.add_orientation(pixel(chair.rect_a), pixel(chair.rect_b), floor)?;
        let outline = chair.outline.iter().copied().map(pixel).collect();
        let shape = room.add_shape(orientation, outline)?;
        chairs.push((orientation, shape));
    }

    for placement in &desc.placements {
        let &(orientation, shape) = chairs.get(placement.chair).ok_or_else(|| {
            format!(
                "placement references unknown chair index {}",
                placement.chair
            )
        })?;
        room.add_placement(
            orientation,
            shape,
            Pt2::new(placement.anchor[0], placement.anchor[1]),
        )?;
    }
    Ok(room)
}

fn write_report_json(report: &SeatingReport) -> Result<String, Box<dyn Error>> {
    Ok(serde_json::to_string_pretty(report)?)
}

fn run_seating_from_files(
    room_path: &str,
    floor_path: &str,
    config_path: Option<&str>,
) -> Result<String, Box<dyn Error>> {
    let desc: RoomDescription = load_json_file(Path::new(room_path))?;
    let floor = FloorImage::new(image::open(floor_path)?);

    let config = if let Some(cfg_path) = config_path {
        load_json_file::<SeatingConfig>(Path::new(cfg_path))?
    } else {
        SeatingConfig::default()
    };

    let room = build_room(&desc, &floor)?;
    let report = solve_seating(&room, &config)?;
    write_report_json(&report)
}

fn main() {
    if let Err(err) = try_main() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn try_main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let json = run_seating_from_files(&args.room, &args.floor, args.config.as_deref())?;
    println!("{}", json);
    Ok(())
}
