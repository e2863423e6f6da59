// src/main.rs
// Demo entry point for Autopark: runs the parallel parking maneuver against
// a scripted sensor sweep and logs the wheel commands the platform would
// receive. The real transport (simulator bridge or serial driver) plugs in
// through the same RangeSensor / ActuationSink traits used here.

use log::info;

use autopark::actuation::{wheel_speeds, ActuationError, ActuationSink, MotionCommand};
use autopark::sensing::{Channel, Direction, RangeSensor, RawScan};
use autopark::{ParkConfig, Sequencer};

/// Scripted sensor sweep: the gap behind the rear-right lower sensor closes
/// a little with every read, the way it does while creeping past a parked
/// row. Everything else stays fixed.
struct ScriptedBay {
    tick: usize,
}

impl RangeSensor for ScriptedBay {
    fn read(&mut self) -> RawScan {
        let mut scan = RawScan::empty();
        // rear-right lower: obstacle edging closer as the platform advances
        let rear = (0.5 + 0.1 * self.tick as f64).min(2.7);
        scan.set(Channel::lower(Direction::SouthEast), rear);
        scan.set(Channel::upper(Direction::NorthWest), 4.0);
        scan.set(Channel::upper(Direction::NorthEast), 4.0);
        // left side deliberately unset: reads as no detection -> far
        self.tick += 1;
        scan
    }
}

/// Logs each command as the differential wheel speeds it maps to.
struct WheelLogSink {
    max_wheel_velocity: f64,
}

impl ActuationSink for WheelLogSink {
    fn apply(&mut self, command: MotionCommand) -> Result<(), ActuationError> {
        let wheels = wheel_speeds(command, self.max_wheel_velocity);
        info!(
            "apply {} -> left={:.2} right={:.2}",
            command, wheels.left, wheels.right
        );
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging for debugging
    env_logger::init();
    info!("Starting Autopark demo...");

    // Load tunings from YAML if a path was given, otherwise use the
    // shipped defaults
    let config = match std::env::args().nth(1) {
        Some(path) => ParkConfig::load(&path)?,
        None => ParkConfig::default(),
    };

    let phases = config.parallel.assemble()?;
    info!("Assembled parallel maneuver with {} phases", phases.len());

    let sensor = ScriptedBay { tick: 0 };
    let sink = WheelLogSink {
        max_wheel_velocity: config.actuation.max_wheel_velocity,
    };
    let mut sequencer = Sequencer::new(sensor, sink, phases);

    // Poll loop: one tick per cycle until the maneuver reports finished.
    // Bounded so a mistuned script cannot spin forever.
    let mut iteration = 0;
    while iteration < 500 {
        if sequencer.tick()? {
            break;
        }
        std::thread::sleep(std::time::Duration::from_millis(50));
        iteration += 1;
    }

    info!("Autopark demo completed after {} ticks", iteration);
    Ok(())
}
