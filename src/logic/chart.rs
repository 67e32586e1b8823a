use std::fmt;

use itertools::{Itertools, MinMaxResult};
use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::model::SalesRecord;

pub const LOW_PRICE_COLOR: Rgb = Rgb(0x4C, 0xAF, 0x50);
pub const HIGH_PRICE_COLOR: Rgb = Rgb(0xFF, 0x6B, 0x6B);

/// Outer size, margins and band padding of the plotting area
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub margin_top: f64,
    pub margin_right: f64,
    pub margin_bottom: f64,
    pub margin_left: f64,
    pub band_padding: f64,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            width: 960.0,
            height: 500.0,
            margin_top: 20.0,
            margin_right: 30.0,
            margin_bottom: 30.0,
            margin_left: 60.0,
            band_padding: 0.1,
        }
    }
}

impl ChartLayout {
    pub fn inner_width(&self) -> f64 {
        (self.width - self.margin_left - self.margin_right).max(0.0)
    }

    pub fn inner_height(&self) -> f64 {
        (self.height - self.margin_top - self.margin_bottom).max(0.0)
    }

    /// A usable layout has finite non-negative sizes, padding in `[0, 1)`
    /// and margins that leave a non-empty plotting area.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let dimensions = [
            ("width", self.width),
            ("height", self.height),
            ("margin_top", self.margin_top),
            ("margin_right", self.margin_right),
            ("margin_bottom", self.margin_bottom),
            ("margin_left", self.margin_left),
        ];
        for (name, value) in dimensions {
            if !value.is_finite() || value < 0.0 {
                return Err(LayoutError::InvalidDimension { name, value });
            }
        }

        if !(0.0..1.0).contains(&self.band_padding) {
            return Err(LayoutError::BandPadding(self.band_padding));
        }

        if self.inner_width() <= 0.0 || self.inner_height() <= 0.0 {
            return Err(LayoutError::NoPlotArea {
                width: self.width,
                height: self.height,
            });
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Linear interpolation per channel, `t` clamped to `[0, 1]`
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let channel = |a: u8, b: u8| -> u8 {
            let value = f64::from(a) + (f64::from(b) - f64::from(a)) * t;
            value.round().clamp(0.0, 255.0) as u8
        };
        Rgb(
            channel(self.0, other.0),
            channel(self.1, other.1),
            channel(self.2, other.2),
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Categorical axis: each label gets an equal-width band along the range.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    domain: Vec<String>,
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    /// Same inner and outer `padding`, bands centered in `range`.
    pub fn new(domain: Vec<String>, range: (f64, f64), padding: f64) -> Self {
        let (r0, r1) = range;
        let n = domain.len() as f64;
        let step = (r1 - r0) / (n - padding + 2.0 * padding).max(1.0);
        let start = r0 + (r1 - r0 - step * (n - padding)) * 0.5;

        Self {
            domain,
            start,
            step,
            bandwidth: step * (1.0 - padding),
        }
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn slot(&self, label: &str) -> Option<usize> {
        self.domain.iter().position(|l| l == label)
    }

    pub fn position(&self, slot: usize) -> f64 {
        self.start + self.step * slot as f64
    }
}

/// Continuous mapping from `domain` onto `range`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Position of `value` within the domain as a fraction, or `None` when
    /// the domain has zero width.
    pub fn normalize(&self, value: f64) -> Option<f64> {
        let width = self.domain.1 - self.domain.0;
        if width == 0.0 {
            return None;
        }
        Some((value - self.domain.0) / width)
    }

    /// A zero-width domain maps everything onto the start of the range.
    pub fn scale(&self, value: f64) -> f64 {
        let t = self.normalize(value).unwrap_or(0.0);
        self.range.0 + (self.range.1 - self.range.0) * t
    }
}

/// Selling price to color, interpolated between two fixed stops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScale {
    domain: LinearScale,
    low: Rgb,
    high: Rgb,
}

impl ColorScale {
    pub fn new(min_price: f64, max_price: f64) -> Self {
        Self {
            domain: LinearScale::new((min_price, max_price), (0.0, 1.0)),
            low: LOW_PRICE_COLOR,
            high: HIGH_PRICE_COLOR,
        }
    }

    /// When every price is the same, every record gets the midpoint color.
    pub fn color(&self, price: f64) -> Rgb {
        let t = self.domain.normalize(price).unwrap_or(0.5);
        self.low.lerp(self.high, t)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuantityDomain {
    pub min: u64,
    pub max: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceDomain {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceLegend {
    pub min: f64,
    pub max: f64,
    pub min_label: String,
    pub max_label: String,
    pub low_color: String,
    pub high_color: String,
}

/// Everything a renderer needs to draw one sales record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub year: i32,
    pub month: String,
    pub slot: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub units_sold: u64,
    pub selling_price: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartModel {
    pub layout: ChartLayout,
    pub months: Vec<String>,
    pub band_width: f64,
    pub quantity_domain: QuantityDomain,
    pub price_domain: PriceDomain,
    pub bars: Vec<Bar>,
    pub legend: PriceLegend,
}

/// Compute chart scales for `records` with the default layout.
///
/// Returns `None` when there are no records.
pub fn prepare(records: &[SalesRecord]) -> Option<ChartModel> {
    prepare_with_layout(records, ChartLayout::default())
}

pub fn prepare_with_layout(records: &[SalesRecord], layout: ChartLayout) -> Option<ChartModel> {
    let max_units = records.iter().map(|r| r.units_sold).max()?;

    let (min_price, max_price) = match records
        .iter()
        .map(|r| r.selling_price)
        .minmax_by(|a, b| a.total_cmp(b))
    {
        MinMaxResult::NoElements => return None,
        MinMaxResult::OneElement(price) => (price, price),
        MinMaxResult::MinMax(min, max) => (min, max),
    };

    let months: Vec<String> = records.iter().map(|r| r.month.clone()).unique().collect();

    let inner_height = layout.inner_height();
    let x_scale = BandScale::new(months, (0.0, layout.inner_width()), layout.band_padding);
    let y_scale = LinearScale::new((0.0, max_units as f64), (inner_height, 0.0));
    let color_scale = ColorScale::new(min_price, max_price);

    let bars = records
        .iter()
        .map(|record| {
            // every month label is in the domain by construction
            let slot = x_scale.slot(&record.month).unwrap_or_default();
            let y = y_scale.scale(record.units_sold as f64);
            Bar {
                year: record.year,
                month: record.month.clone(),
                slot,
                x: x_scale.position(slot),
                y,
                width: x_scale.bandwidth(),
                height: inner_height - y,
                units_sold: record.units_sold,
                selling_price: record.selling_price,
                color: color_scale.color(record.selling_price).to_string(),
            }
        })
        .collect();

    Some(ChartModel {
        layout,
        band_width: x_scale.bandwidth(),
        months: x_scale.domain().to_vec(),
        quantity_domain: QuantityDomain {
            min: 0,
            max: max_units,
        },
        price_domain: PriceDomain {
            min: min_price,
            max: max_price,
        },
        bars,
        legend: PriceLegend {
            min: min_price,
            max: max_price,
            min_label: format!("{:.2}", min_price),
            max_label: format!("{:.2}", max_price),
            low_color: LOW_PRICE_COLOR.to_string(),
            high_color: HIGH_PRICE_COLOR.to_string(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn flat_layout(width: f64, height: f64) -> ChartLayout {
        ChartLayout {
            width,
            height,
            margin_top: 0.0,
            margin_right: 0.0,
            margin_bottom: 0.0,
            margin_left: 0.0,
            band_padding: 0.1,
        }
    }

    #[test]
    fn test_empty_input_has_no_chart() {
        assert!(prepare(&[]).is_none());
    }

    #[test]
    fn test_band_positions() {
        let records = vec![
            SalesRecord::new(2023, "Jan", 10, 9.99),
            SalesRecord::new(2023, "Feb", 20, 9.99),
            SalesRecord::new(2023, "Mar", 40, 9.99),
        ];
        let chart = prepare_with_layout(&records, flat_layout(310.0, 100.0)).unwrap();

        assert!(approx(chart.band_width, 90.0));
        let xs: Vec<f64> = chart.bars.iter().map(|b| b.x).collect();
        assert!(approx(xs[0], 10.0));
        assert!(approx(xs[1], 110.0));
        assert!(approx(xs[2], 210.0));
    }

    #[test]
    fn test_heights_proportional_to_units() {
        let records = vec![
            SalesRecord::new(2023, "Jan", 10, 9.99),
            SalesRecord::new(2023, "Feb", 20, 12.99),
            SalesRecord::new(2023, "Mar", 40, 14.99),
        ];
        let chart = prepare_with_layout(&records, flat_layout(310.0, 100.0)).unwrap();

        assert_eq!(chart.quantity_domain, QuantityDomain { min: 0, max: 40 });
        let heights: Vec<f64> = chart.bars.iter().map(|b| b.height).collect();
        assert!(approx(heights[0], 25.0));
        assert!(approx(heights[1], 50.0));
        assert!(approx(heights[2], 100.0));
        assert!(approx(chart.bars[2].y, 0.0));
        assert!(approx(chart.bars[0].y, 75.0));
    }

    #[test]
    fn test_months_keep_first_appearance_order() {
        let records = vec![
            SalesRecord::new(2023, "Mar", 1, 1.0),
            SalesRecord::new(2023, "Jan", 1, 1.0),
            SalesRecord::new(2024, "Mar", 1, 1.0),
            SalesRecord::new(2023, "Feb", 1, 1.0),
        ];
        let chart = prepare(&records).unwrap();

        assert_eq!(chart.months, vec!["Mar", "Jan", "Feb"]);
        let slots: Vec<usize> = chart.bars.iter().map(|b| b.slot).collect();
        assert_eq!(slots, vec![0, 1, 0, 2]);
        assert_eq!(chart.bars.len(), records.len());
    }

    #[test]
    fn test_price_colors_span_both_stops() {
        let records = vec![
            SalesRecord::new(2023, "Jan", 10, 8.0),
            SalesRecord::new(2023, "Feb", 10, 12.0),
            SalesRecord::new(2023, "Mar", 10, 16.0),
        ];
        let chart = prepare(&records).unwrap();

        assert_eq!(chart.bars[0].color, "#4caf50");
        assert_eq!(chart.bars[1].color, "#a68d5e");
        assert_eq!(chart.bars[2].color, "#ff6b6b");
        assert_eq!(chart.legend.min_label, "8.00");
        assert_eq!(chart.legend.max_label, "16.00");
    }

    #[test]
    fn test_uniform_price_single_color() {
        let records = vec![
            SalesRecord::new(2023, "Jan", 5, 10.99),
            SalesRecord::new(2023, "Feb", 15, 10.99),
            SalesRecord::new(2023, "Mar", 25, 10.99),
        ];
        let chart = prepare(&records).unwrap();

        assert!(chart.bars.iter().all(|b| b.color == chart.bars[0].color));
        assert!(!chart.bars[0].color.contains("NaN"));
        assert_eq!(chart.legend.min_label, chart.legend.max_label);
        assert_eq!(chart.legend.min_label, "10.99");
        assert_eq!(chart.price_domain.min, chart.price_domain.max);
    }

    #[test]
    fn test_all_zero_units() {
        let records = vec![
            SalesRecord::new(2023, "Jan", 0, 1.0),
            SalesRecord::new(2023, "Feb", 0, 2.0),
        ];
        let chart = prepare(&records).unwrap();

        assert_eq!(chart.quantity_domain.max, 0);
        assert!(chart.bars.iter().all(|b| b.height == 0.0 && b.y.is_finite()));
    }

    #[test]
    fn test_single_record() {
        let records = vec![SalesRecord::new(2023, "Jan", 42, 9.5)];
        let chart = prepare(&records).unwrap();
        let layout = ChartLayout::default();

        assert_eq!(chart.months, vec!["Jan"]);
        assert!(approx(chart.bars[0].height, layout.inner_height()));
        assert_eq!(chart.legend.min_label, "9.50");
    }

    #[test]
    fn test_layout_validation() {
        assert_eq!(ChartLayout::default().validate(), Ok(()));
        assert_eq!(flat_layout(310.0, 100.0).validate(), Ok(()));

        let mut layout = ChartLayout::default();
        layout.band_padding = 1.0;
        assert_eq!(layout.validate(), Err(LayoutError::BandPadding(1.0)));
        layout.band_padding = -0.1;
        assert_eq!(layout.validate(), Err(LayoutError::BandPadding(-0.1)));

        let mut layout = ChartLayout::default();
        layout.margin_top = 300.0;
        layout.margin_bottom = 200.0;
        assert!(matches!(layout.validate(), Err(LayoutError::NoPlotArea { .. })));

        let mut layout = ChartLayout::default();
        layout.width = f64::NAN;
        assert!(matches!(
            layout.validate(),
            Err(LayoutError::InvalidDimension { name: "width", .. })
        ));
    }

    #[test]
    fn test_rgb_display() {
        assert_eq!(LOW_PRICE_COLOR.to_string(), "#4caf50");
        assert_eq!(Rgb(0, 1, 255).to_string(), "#0001ff");
    }
}
