use std::thread;
use std::time::{Duration, Instant};

use chrono::{Local, NaiveDateTime, TimeZone};
use clap::{Parser, Subcommand};
use vobs_core::observer::{DEFAULT_LATITUDE_DEG, DEFAULT_LONGITUDE_DEG};
use vobs_core::{Body, BodyPosition, Ephemeris, EphemerisConfig, Observer};
use vobs_frames::{
    ArcDiscretizer, DEFAULT_ARC_RESOLUTION_DEG, DEFAULT_RADIUS, EquatorialGrid, EquatorialPosition,
    GridConfig, GridLineKind, SphereConfig,
};
use vobs_time::{ClockConfig, SimClock, TimeInstant};

#[derive(Parser)]
#[command(name = "vobs", about = "Virtual observatory ephemeris CLI")]
struct Cli {
    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// RA/Dec and altitude/azimuth of the Sun, Moon and planets
    Positions {
        /// Date/time (YYYY-MM-DDThh:mm:ss[Z|±hh:mm]); defaults to now
        #[arg(long)]
        date: Option<String>,
        /// Read a date without offset as local time instead of UTC
        #[arg(long)]
        local: bool,
        /// Observer latitude in degrees
        #[arg(long, default_value_t = DEFAULT_LATITUDE_DEG, allow_hyphen_values = true)]
        lat: f64,
        /// Observer longitude in degrees, east positive
        #[arg(long, default_value_t = DEFAULT_LONGITUDE_DEG, allow_hyphen_values = true)]
        lon: f64,
        /// Single body (Sun, Moon, Mercury, ...); all bodies if omitted
        #[arg(long)]
        body: Option<String>,
        /// Skip the Moon's topocentric correction
        #[arg(long)]
        geocentric: bool,
        /// Skip the perturbation series
        #[arg(long)]
        no_perturbations: bool,
    },
    /// Local sidereal time for a longitude
    Sidereal {
        /// Date/time; defaults to now
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        local: bool,
        /// Longitude in degrees, east positive
        #[arg(long, default_value_t = DEFAULT_LONGITUDE_DEG, allow_hyphen_values = true)]
        lon: f64,
    },
    /// Day number (days since 1999-12-31T00:00Z)
    DayNumber {
        /// Date/time; defaults to now
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        local: bool,
    },
    /// Great-circle polyline between two directions
    Arc {
        /// Start right ascension, hours
        #[arg(long)]
        ra1: f64,
        /// Start declination, degrees
        #[arg(long, allow_hyphen_values = true)]
        dec1: f64,
        /// End right ascension, hours
        #[arg(long)]
        ra2: f64,
        /// End declination, degrees
        #[arg(long, allow_hyphen_values = true)]
        dec2: f64,
        #[arg(long, default_value_t = DEFAULT_RADIUS)]
        radius: f64,
        /// Angular resolution, degrees
        #[arg(long, default_value_t = DEFAULT_ARC_RESOLUTION_DEG)]
        resolution: f64,
    },
    /// Equatorial grid summary (or every point with --points)
    Grid {
        #[arg(long, default_value_t = 11)]
        ra_divisions: u32,
        #[arg(long, default_value_t = 10)]
        dec_divisions: u32,
        #[arg(long, default_value_t = DEFAULT_RADIUS)]
        radius: f64,
        #[arg(long, default_value_t = DEFAULT_ARC_RESOLUTION_DEG)]
        resolution: f64,
        /// Print every point
        #[arg(long)]
        points: bool,
    },
    /// Run the simulated clock and print a body's track
    Simulate {
        /// Start date/time; defaults to now
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        local: bool,
        /// Time-speed multiplier (clamped to ±max-speed)
        #[arg(long, default_value_t = 1, allow_hyphen_values = true)]
        speed: i64,
        #[arg(long, default_value_t = 4096)]
        max_speed: i64,
        /// Real milliseconds between steps
        #[arg(long, default_value_t = 100)]
        interval_ms: u64,
        /// Number of steps to run
        #[arg(long, default_value_t = 10)]
        ticks: u32,
        #[arg(long, default_value = "Moon")]
        body: String,
        #[arg(long, default_value_t = DEFAULT_LATITUDE_DEG, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, default_value_t = DEFAULT_LONGITUDE_DEG, allow_hyphen_values = true)]
        lon: f64,
    },
}

fn exit_with(msg: String) -> ! {
    eprintln!("{msg}");
    std::process::exit(1);
}

fn parse_instant(date: Option<&str>, local: bool) -> TimeInstant {
    let Some(s) = date else {
        return TimeInstant::now();
    };
    if local {
        let naive = NaiveDateTime::parse_from_str(s.trim(), "%Y-%m-%dT%H:%M:%S")
            .unwrap_or_else(|e| exit_with(format!("Invalid local date {s}: {e}")));
        let zoned = Local
            .from_local_datetime(&naive)
            .single()
            .unwrap_or_else(|| exit_with(format!("Ambiguous or skipped local time: {s}")));
        return TimeInstant::from_zoned(&zoned);
    }
    s.parse()
        .unwrap_or_else(|e| exit_with(format!("Invalid date {s}: {e}")))
}

fn parse_body(name: &str) -> Body {
    Body::from_name(name).unwrap_or_else(|| exit_with(format!("Unknown body: {name}")))
}

fn load_ephemeris(config: EphemerisConfig) -> Ephemeris {
    Ephemeris::new(config).unwrap_or_else(|e| exit_with(format!("Invalid configuration: {e}")))
}

fn observer(lat: f64, lon: f64) -> Observer {
    Observer::new(lat, lon).unwrap_or_else(|e| exit_with(format!("Invalid observer: {e}")))
}

fn sphere(radius: f64, resolution: f64) -> SphereConfig {
    SphereConfig::new(radius, resolution)
        .unwrap_or_else(|e| exit_with(format!("Invalid sphere: {e}")))
}

fn print_position(pos: &BodyPosition) {
    let [x, y, z] = pos.direction;
    let flag = if pos.converged { "" } else { "  [not converged]" };
    println!(
        "{:<8} RA {:>8.4} h  Dec {:>+8.3} deg  Alt {:>+7.2} deg  Az {:>6.2} deg  \
         xyz ({x:.1}, {y:.1}, {z:.1}){flag}",
        pos.body.name(),
        pos.equatorial.ra_hours(),
        pos.equatorial.dec_deg(),
        pos.horizontal.altitude.to_degrees(),
        pos.horizontal.azimuth.to_degrees(),
    );
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match cli.command {
        Commands::Positions {
            date,
            local,
            lat,
            lon,
            body,
            geocentric,
            no_perturbations,
        } => {
            let instant = parse_instant(date.as_deref(), local);
            let engine = load_ephemeris(EphemerisConfig {
                apply_perturbations: !no_perturbations,
                apply_topocentric: !geocentric,
                ..EphemerisConfig::with_observer(observer(lat, lon))
            });

            if let Some(name) = body {
                let body = parse_body(&name);
                match engine.position(body, &instant) {
                    Ok(pos) => print_position(&pos),
                    Err(e) => exit_with(format!("{body}: {e}")),
                }
                return;
            }

            let snap = engine
                .snapshot(&instant)
                .unwrap_or_else(|e| exit_with(format!("Snapshot failed: {e}")));
            println!(
                "{}  day {:.5}  LST {:.4} h",
                snap.instant, snap.day, snap.lst_hours
            );
            for (body, result) in &snap.positions {
                match result {
                    Ok(pos) => print_position(pos),
                    Err(e) => println!("{:<8} unavailable: {e}", body.name()),
                }
            }
        }

        Commands::Sidereal { date, local, lon } => {
            let instant = parse_instant(date.as_deref(), local);
            let engine = load_ephemeris(EphemerisConfig::with_observer(observer(0.0, lon)));
            println!("{:.6}", engine.local_sidereal_time(&instant));
        }

        Commands::DayNumber { date, local } => {
            let instant = parse_instant(date.as_deref(), local);
            println!("{:.6}", instant.day_number());
        }

        Commands::Arc {
            ra1,
            dec1,
            ra2,
            dec2,
            radius,
            resolution,
        } => {
            let arcs = ArcDiscretizer::new(sphere(radius, resolution))
                .unwrap_or_else(|e| exit_with(format!("Invalid sphere: {e}")));
            let start = EquatorialPosition::from_hours_deg(ra1, dec1);
            let end = EquatorialPosition::from_hours_deg(ra2, dec2);
            let points = arcs
                .discretize_equatorial(&start, &end)
                .unwrap_or_else(|e| exit_with(format!("Arc failed: {e}")));
            for [x, y, z] in points {
                println!("{x:.6} {y:.6} {z:.6}");
            }
        }

        Commands::Grid {
            ra_divisions,
            dec_divisions,
            radius,
            resolution,
            points,
        } => {
            let grid_config = GridConfig {
                ra_divisions,
                dec_divisions,
            };
            let grid = EquatorialGrid::build(&sphere(radius, resolution), &grid_config)
                .unwrap_or_else(|e| exit_with(format!("Grid failed: {e}")));
            for line in grid.lines() {
                let label = match line.kind {
                    GridLineKind::Meridian { right_ascension } => {
                        format!("meridian RA {:.3} h", right_ascension.to_degrees() / 15.0)
                    }
                    GridLineKind::Parallel { declination } => {
                        format!("parallel Dec {:+.1} deg", declination.to_degrees())
                    }
                };
                println!("{label}: {} points", line.points.len());
                if points {
                    for [x, y, z] in &line.points {
                        println!("  {x:.6} {y:.6} {z:.6}");
                    }
                }
            }
        }

        Commands::Simulate {
            date,
            local,
            speed,
            max_speed,
            interval_ms,
            ticks,
            body,
            lat,
            lon,
        } => {
            let body = parse_body(&body);
            let engine = load_ephemeris(EphemerisConfig::with_observer(observer(lat, lon)));
            let config = ClockConfig {
                tick_interval: Duration::from_millis(interval_ms),
                max_speed,
            };
            let mut clock = SimClock::new(parse_instant(date.as_deref(), local), config)
                .unwrap_or_else(|e| exit_with(format!("Invalid clock: {e}")));
            clock.set_speed(speed);
            log::info!(
                "simulating {body} from {} every {} ms",
                clock.instant(),
                interval_ms
            );
            println!(
                "speed x{}  ({:+} s per step)",
                clock.speed(),
                clock.step_seconds()
            );

            let mut last = Instant::now();
            let mut steps = 0;
            while steps < ticks {
                thread::sleep(config.tick_interval);
                let now = Instant::now();
                let moved = clock
                    .advance(now - last)
                    .unwrap_or_else(|e| exit_with(format!("Clock stopped: {e}")));
                last = now;
                if !moved && clock.speed() != 0 {
                    continue;
                }
                steps += 1;
                let instant = clock.instant();
                match engine.position(body, &instant) {
                    Ok(pos) => {
                        print!("{instant}  ");
                        print_position(&pos);
                    }
                    Err(e) => println!("{instant}  {body}: {e}"),
                }
            }
        }
    }
}
