//! Screen layout
//!
//! Two tables describe the 320x240 landscape screen. `STATIC_ITEMS` are
//! drawn once at boot. `VALUE_FIELDS` are the only regions touched after
//! that; each maps one sample component to its rectangle and text cursor.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use imuscope_core::SensorSample;

/// Screen background
pub const BACKGROUND: Rgb565 = Rgb565::BLACK;
/// Title and splash text
pub const FOREGROUND: Rgb565 = Rgb565::WHITE;
/// Label text
pub const LABEL: Rgb565 = Rgb565::YELLOW;
/// Fill behind each value
pub const VALUE_BACKGROUND: Rgb565 = Rgb565::RED;

/// Greeting shown while the screen comes up
pub const SPLASH_TEXT: &str = "Hello!\nSearching for the sensor...";

/// Separators span the full width
pub const SCREEN_WIDTH: u32 = 320;

/// Width of a value region: six 10 px glyphs plus a margin pixel each side
const VALUE_WIDTH: u32 = 62;
const VALUE_HEIGHT: u32 = 20;

/// Something drawn once with the static layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaticItem {
    Text {
        at: Point,
        text: &'static str,
        color: Rgb565,
    },
    Separator {
        y: i32,
    },
}

pub static STATIC_ITEMS: [StaticItem; 15] = [
    text(5, 5, "Right now...", FOREGROUND),
    text(10, 30, "Temperature:", LABEL),
    text(222, 30, "\u{b0}C", LABEL),
    StaticItem::Separator { y: 60 },
    text(10, 75, "Accelerometer Values", LABEL),
    text(5, 100, "X:", LABEL),
    text(92, 100, "Y:", LABEL),
    text(179, 100, "Z:", LABEL),
    text(266, 100, "m/s^2", LABEL),
    StaticItem::Separator { y: 125 },
    text(10, 135, "Gyroscope Values", LABEL),
    text(5, 160, "X:", LABEL),
    text(92, 160, "Y:", LABEL),
    text(179, 160, "Z:", LABEL),
    text(266, 160, "rad/s", LABEL),
];

const fn text(x: i32, y: i32, text: &'static str, color: Rgb565) -> StaticItem {
    StaticItem::Text {
        at: Point::new(x, y),
        text,
        color,
    }
}

/// A redrawable sample component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Field {
    Temperature,
    AccelX,
    AccelY,
    AccelZ,
    GyroX,
    GyroY,
    GyroZ,
}

impl Field {
    /// The component of `sample` this field shows
    pub fn value(self, sample: &SensorSample) -> f32 {
        match self {
            Field::Temperature => sample.temperature_c,
            Field::AccelX => sample.accel.x,
            Field::AccelY => sample.accel.y,
            Field::AccelZ => sample.accel.z,
            Field::GyroX => sample.gyro.x,
            Field::GyroY => sample.gyro.y,
            Field::GyroZ => sample.gyro.z,
        }
    }
}

/// One value region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueField {
    pub field: Field,
    pub region: Rectangle,
    pub cursor: Point,
}

const fn value_field(field: Field, x: i32, y: i32) -> ValueField {
    ValueField {
        field,
        region: Rectangle::new(Point::new(x, y), Size::new(VALUE_WIDTH, VALUE_HEIGHT)),
        cursor: Point::new(x + 1, y),
    }
}

pub static VALUE_FIELDS: [ValueField; 7] = [
    value_field(Field::Temperature, 150, 30),
    value_field(Field::AccelX, 25, 100),
    value_field(Field::AccelY, 112, 100),
    value_field(Field::AccelZ, 199, 100),
    value_field(Field::GyroX, 25, 160),
    value_field(Field::GyroY, 112, 160),
    value_field(Field::GyroZ, 199, 160),
];
