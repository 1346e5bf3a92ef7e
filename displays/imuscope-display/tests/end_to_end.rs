//! Boot, then run the scheduler against a manual clock with both tasks at
//! their default one second periods.

use std::cell::Cell;

use embassy_futures::block_on;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::Point;
use embedded_graphics::primitives::Rectangle;
use imuscope_core::boot::{bring_up, BootError};
use imuscope_core::config::{ImuConfig, TimingConfig};
use imuscope_core::console::SAMPLE_HEADER;
use imuscope_core::scheduler::{Iterations, Scheduler};
use imuscope_core::tasks::SamplingTask;
use imuscope_core::traits::{Clock, ImuSensor};
use imuscope_core::{ReadStatus, SampleCell, SensorSample, Vector3};
use imuscope_display::layout::{VALUE_BACKGROUND, VALUE_FIELDS};
use imuscope_display::{Canvas, CanvasError, RefreshTask, Renderer};
use imuscope_hal::{StorageVolume, VolumeError, VolumeHeader};

struct ManualClock(Cell<u64>);

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.0.get()
    }
}

/// Sensor that returns a fixed reading until told to fail
struct InjectedImu {
    present: bool,
    reading: SensorSample,
    failing: bool,
}

impl InjectedImu {
    fn new() -> Self {
        Self {
            present: true,
            reading: SensorSample {
                temperature_c: 24.5,
                accel: Vector3::new(0.1, -0.2, 9.81),
                gyro: Vector3::new(0.01, 0.0, -0.01),
            },
            failing: false,
        }
    }
}

impl ImuSensor for InjectedImu {
    type Error = ();

    fn detect(&mut self) -> Result<(), ()> {
        if self.present {
            Ok(())
        } else {
            Err(())
        }
    }

    fn configure(&mut self, _config: &ImuConfig) -> Result<(), ()> {
        Ok(())
    }

    fn configuration(&mut self) -> Result<ImuConfig, ()> {
        Ok(ImuConfig::default())
    }

    fn read(&mut self) -> Result<SensorSample, ()> {
        if self.failing {
            Err(())
        } else {
            Ok(self.reading)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Op {
    Clear,
    Fill(Rectangle),
    Text(String),
    Value(Rectangle, String),
    Line,
}

#[derive(Default)]
struct Recorder {
    ops: Vec<Op>,
}

impl Canvas for Recorder {
    fn clear(&mut self, _color: Rgb565) -> Result<(), CanvasError> {
        self.ops.push(Op::Clear);
        Ok(())
    }

    fn fill_rect(&mut self, area: Rectangle, color: Rgb565) -> Result<(), CanvasError> {
        assert_eq!(color, VALUE_BACKGROUND);
        self.ops.push(Op::Fill(area));
        Ok(())
    }

    fn draw_text(&mut self, _at: Point, text: &str, _: Rgb565, _: Rgb565) -> Result<(), CanvasError> {
        self.ops.push(Op::Text(text.to_string()));
        Ok(())
    }

    fn draw_text_clipped(
        &mut self,
        _at: Point,
        text: &str,
        _: Rgb565,
        _: Rgb565,
        clip: Rectangle,
    ) -> Result<(), CanvasError> {
        self.ops.push(Op::Value(clip, text.to_string()));
        Ok(())
    }

    fn hline(&mut self, _from: Point, _length: u32, _color: Rgb565) -> Result<(), CanvasError> {
        self.ops.push(Op::Line);
        Ok(())
    }
}

struct MountedVolume;

impl StorageVolume for MountedVolume {
    async fn mount(&mut self) -> Result<VolumeHeader, VolumeError> {
        Ok(VolumeHeader::current())
    }
}

struct InstantDelay;

impl embedded_hal_async::delay::DelayNs for InstantDelay {
    async fn delay_ns(&mut self, _ns: u32) {}
}

fn value_texts(ops: &[Op]) -> Vec<&str> {
    ops.iter()
        .filter_map(|op| match op {
            Op::Value(_, text) => Some(text.trim()),
            _ => None,
        })
        .collect()
}

const EXPECTED: [&str; 7] = ["24.50", "0.10", "-0.20", "9.81", "0.01", "0.00", "-0.01"];

#[test]
fn test_one_second_cadence() {
    let timing = TimingConfig::default();
    let clock = ManualClock(Cell::new(0));
    let mut cell = SampleCell::new();
    let (writer, reader) = cell.split();
    let mut sampler = SamplingTask::new(InjectedImu::new(), writer, String::new());
    let mut renderer = Renderer::new(Recorder::default());

    let report = block_on(bring_up(
        &mut MountedVolume,
        &mut sampler,
        &ImuConfig::default(),
        &mut renderer,
        &mut InstantDelay,
    ))
    .unwrap();
    assert!(report.initial_read_ok);
    assert_eq!(value_texts(&renderer.canvas().ops), EXPECTED);

    let boot_ops = renderer.canvas().ops.len();
    let mut refresh = RefreshTask::new(renderer, reader);
    {
        let mut sample = || {
            let _ = sampler.run();
        };
        let mut redraw = || {
            let _ = refresh.run();
        };
        let mut scheduler: Scheduler<&ManualClock> = Scheduler::new(&clock);
        scheduler
            .add_task(timing.sample_period_ms, Iterations::Forever, &mut sample)
            .unwrap();
        scheduler
            .add_task(timing.refresh_period_ms, Iterations::Forever, &mut redraw)
            .unwrap();
        scheduler.enable_all();

        assert_eq!(scheduler.tick(), 0);
        clock.0.set(999);
        assert_eq!(scheduler.tick(), 0);
        clock.0.set(1000);
        assert_eq!(scheduler.tick(), 2);
    }

    // Boot read plus the one at t=1000
    let console = sampler.console();
    assert_eq!(console.matches(SAMPLE_HEADER).count(), 2);
    assert!(console.contains("Temperature:   24.50  °C"));

    // After boot only the value regions were drawn
    let ops = &refresh.renderer().canvas().ops[boot_ops..];
    assert_eq!(ops.len(), 2 * VALUE_FIELDS.len());
    for (pair, field) in ops.chunks(2).zip(VALUE_FIELDS.iter()) {
        assert_eq!(pair[0], Op::Fill(field.region));
        assert!(matches!(&pair[1], Op::Value(clip, _) if *clip == field.region));
    }
    assert_eq!(value_texts(ops), EXPECTED);
}

#[test]
fn test_failed_read_keeps_last_values_on_screen() {
    let clock = ManualClock(Cell::new(0));
    let mut cell = SampleCell::new();
    let (writer, reader) = cell.split();
    let mut sampler = SamplingTask::new(InjectedImu::new(), writer, String::new());
    let mut renderer = Renderer::new(Recorder::default());

    block_on(bring_up(
        &mut MountedVolume,
        &mut sampler,
        &ImuConfig::default(),
        &mut renderer,
        &mut InstantDelay,
    ))
    .unwrap();
    sampler.sensor_mut().failing = true;

    let boot_ops = renderer.canvas().ops.len();
    let mut refresh = RefreshTask::new(renderer, reader);
    let status = Cell::new(ReadStatus::Unread);
    {
        let mut sample = || {
            let _ = sampler.run();
        };
        let mut redraw = || {
            if let Ok(s) = refresh.run() {
                status.set(s);
            }
        };
        let mut scheduler: Scheduler<&ManualClock> = Scheduler::new(&clock);
        scheduler
            .add_task(1000, Iterations::Forever, &mut sample)
            .unwrap();
        scheduler
            .add_task(1000, Iterations::Forever, &mut redraw)
            .unwrap();
        scheduler.enable_all();

        for t in [1000, 2000] {
            clock.0.set(t);
            scheduler.tick();
        }
    }

    assert_eq!(status.get(), ReadStatus::Stale { failures: 2 });
    assert_eq!(sampler.console().matches("Sensor read failed").count(), 2);
    let ops = &refresh.renderer().canvas().ops[boot_ops..];
    assert_eq!(value_texts(&ops[..14]), EXPECTED);
    assert_eq!(value_texts(&ops[14..]), EXPECTED);
}

#[test]
fn test_missing_sensor_leaves_screen_untouched() {
    let mut cell = SampleCell::new();
    let (writer, _reader) = cell.split();
    let mut imu = InjectedImu::new();
    imu.present = false;
    let mut sampler = SamplingTask::new(imu, writer, String::new());
    let mut renderer = Renderer::new(Recorder::default());

    let result = block_on(bring_up(
        &mut MountedVolume,
        &mut sampler,
        &ImuConfig::default(),
        &mut renderer,
        &mut InstantDelay,
    ));

    assert_eq!(result, Err(BootError::SensorNotFound));
    assert!(renderer.canvas().ops.is_empty());
    assert!(sampler
        .console()
        .contains("Could not find MPU6050 chip, check wiring!"));
}
