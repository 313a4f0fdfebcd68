//! Extended RLE (the Golly dialect), decode only.
//!
//! ```text
//! #CXRLE Pos=0,0
//! x = 3, y = 3, rule = B3/S23
//! bo$2bo$3o!
//! ```
//!
//! `Pos` names the world coordinate of the top-left cell. Rows run downward,
//! so each `$` decrements `y`.

use std::io::Write;

use tracing::{debug, trace};

use super::PatternCodec;
use crate::domain::{Bounds, BoundedGrid};
use crate::error::{LifeError, Result};

/// Codec for `.rle` files
#[derive(Clone, Copy, Debug, Default)]
pub struct RunLength;

/// What the metadata and header lines said about the pattern
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RleHeader {
    pub width: i64,
    pub height: i64,
    /// World coordinate of the top-left cell, from `#CXRLE Pos=`
    pub origin: (i64, i64),
    /// Raw `rule = ...` value, if present
    pub rule: Option<String>,
}

impl RleHeader {
    /// Window spanned by the pattern: `origin.x ..= origin.x + width - 1`
    /// across, `origin.y - height + 1 ..= origin.y` up.
    pub fn bounds(&self) -> Result<Bounds> {
        let (ox, oy) = self.origin;
        let xmax = ox.checked_add(self.width - 1);
        let ymin = oy.checked_sub(self.height - 1);
        match (xmax, ymin) {
            (Some(xmax), Some(ymin)) => Bounds::new(ox, xmax, ymin, oy),
            _ => Err(LifeError::InvalidBounds {
                xmin: ox,
                xmax: xmax.unwrap_or(i64::MAX),
                ymin: ymin.unwrap_or(i64::MIN),
                ymax: oy,
            }),
        }
    }
}

impl RunLength {
    /// Decode and also return the parsed header
    pub fn decode_with_header(&self, text: &str) -> Result<(RleHeader, BoundedGrid)> {
        let mut lines = text.lines().enumerate().map(|(idx, line)| (idx + 1, line));

        let mut origin = (0, 0);
        let mut header = None;
        for (line_no, line) in lines.by_ref() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if trimmed.starts_with('#') {
                if let Some(pos) = parse_cxrle(trimmed, line_no)? {
                    origin = pos;
                }
                continue;
            }
            header = Some(parse_header(trimmed, line_no)?);
            break;
        }

        let (width, height, rule) = header.ok_or_else(|| {
            LifeError::format(text.lines().count(), "missing `x = .., y = ..` header line")
        })?;
        let header = RleHeader {
            width,
            height,
            origin,
            rule,
        };

        let mut body = BodyDecoder::new(BoundedGrid::empty(header.bounds()?), origin);
        for (line_no, line) in lines {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            body.feed_line(trimmed, line_no)?;
            if body.is_done() {
                break;
            }
        }

        let grid = body.finish();
        debug!(
            bounds = %grid.bounds(),
            population = grid.population(),
            rule = header.rule.as_deref().unwrap_or("-"),
            "decoded rle pattern"
        );
        Ok((header, grid))
    }
}

impl PatternCodec for RunLength {
    fn name(&self) -> &'static str {
        "rle"
    }

    fn decode(&self, text: &str) -> Result<BoundedGrid> {
        self.decode_with_header(text).map(|(_, grid)| grid)
    }

    fn encode(&self, _grid: &BoundedGrid, _out: &mut dyn Write) -> Result<()> {
        Err(LifeError::Unsupported {
            codec: self.name(),
            operation: "encoding",
        })
    }
}

/// `#CXRLE key=value ...`; returns the `Pos` origin if one is given.
/// Other `#` lines and unknown keys are ignored.
fn parse_cxrle(line: &str, line_no: usize) -> Result<Option<(i64, i64)>> {
    let mut tokens = line.split_whitespace();
    if tokens.next() != Some("#CXRLE") {
        return Ok(None);
    }

    let mut origin = None;
    for (key, value) in tokens.filter_map(|pair| pair.split_once('=')) {
        if key != "Pos" {
            continue;
        }
        let malformed = || LifeError::format(line_no, format!("malformed Pos `{value}`"));
        let (c, r) = value.split_once(',').ok_or_else(malformed)?;
        let c = c.trim().parse::<i64>().map_err(|_| malformed())?;
        let r = r.trim().parse::<i64>().map_err(|_| malformed())?;
        origin = Some((c, r));
    }
    Ok(origin)
}

/// `x = <int>, y = <int>[, rule = <text>]`
fn parse_header(line: &str, line_no: usize) -> Result<(i64, i64, Option<String>)> {
    let mut fields = line.split(',');

    let mut dimension = |key: &str| -> Result<i64> {
        let field = fields
            .next()
            .ok_or_else(|| LifeError::format(line_no, format!("header is missing `{key}`")))?;
        let value = keyed_value(field, key)
            .ok_or_else(|| LifeError::format(line_no, format!("expected `{key} = <int>`")))?;
        let n = value
            .parse::<i64>()
            .map_err(|_| LifeError::format(line_no, format!("`{value}` is not an integer")))?;
        if n < 1 {
            return Err(LifeError::format(line_no, format!("`{key}` must be positive")));
        }
        Ok(n)
    };
    let width = dimension("x")?;
    let height = dimension("y")?;

    let rule = fields
        .find_map(|field| keyed_value(field, "rule"))
        .map(str::to_owned);
    Ok((width, height, rule))
}

fn keyed_value<'a>(field: &'a str, key: &str) -> Option<&'a str> {
    let (k, v) = field.split_once('=')?;
    (k.trim() == key).then(|| v.trim())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BodyState {
    AwaitingTag,
    AccumulatingCount(i64),
    Done,
}

/// Character-level state machine for the RLE body. A pending count survives
/// line breaks; `!` is terminal.
struct BodyDecoder {
    grid: BoundedGrid,
    origin_x: i64,
    x: i64,
    y: i64,
    state: BodyState,
}

impl BodyDecoder {
    fn new(grid: BoundedGrid, (origin_x, origin_y): (i64, i64)) -> Self {
        Self {
            grid,
            origin_x,
            x: origin_x,
            y: origin_y,
            state: BodyState::AwaitingTag,
        }
    }

    fn is_done(&self) -> bool {
        self.state == BodyState::Done
    }

    fn finish(self) -> BoundedGrid {
        self.grid
    }

    fn feed_line(&mut self, line: &str, line_no: usize) -> Result<()> {
        for (col, c) in line.chars().enumerate() {
            self.step(c, line_no, col + 1)?;
            if self.is_done() {
                break;
            }
        }
        Ok(())
    }

    fn step(&mut self, c: char, line_no: usize, col: usize) -> Result<()> {
        let overflow = || LifeError::format(line_no, format!("run count overflows at column {col}"));

        let count = match self.state {
            BodyState::Done => return Ok(()),
            BodyState::AwaitingTag => 1,
            BodyState::AccumulatingCount(n) => n,
        };

        match c {
            '0'..='9' => {
                let digit = i64::from(c as u8 - b'0');
                let pending = match self.state {
                    BodyState::AccumulatingCount(n) => n,
                    _ => 0,
                };
                let n = pending
                    .checked_mul(10)
                    .and_then(|n| n.checked_add(digit))
                    .ok_or_else(overflow)?;
                self.state = BodyState::AccumulatingCount(n);
                return Ok(());
            }
            '.' | 'b' => {
                self.x = self.x.checked_add(count).ok_or_else(overflow)?;
            }
            'A' | 'o' => {
                for _ in 0..count {
                    self.grid.set_alive(self.x, self.y)?;
                    self.x = self.x.checked_add(1).ok_or_else(overflow)?;
                }
            }
            '$' => {
                self.y = self.y.checked_sub(count).ok_or_else(overflow)?;
                self.x = self.origin_x;
            }
            '!' => {
                trace!(x = self.x, y = self.y, "rle terminator");
                self.state = BodyState::Done;
                return Ok(());
            }
            c if c.is_whitespace() => return Ok(()),
            other => {
                return Err(LifeError::format(
                    line_no,
                    format!("unexpected `{other}` at column {col}"),
                ));
            }
        }

        self.state = BodyState::AwaitingTag;
        Ok(())
    }
}
