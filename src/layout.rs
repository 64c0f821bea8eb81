//! Compile-time description of panel geometry and wiring.
//!
//! [`PanelLayout`] maps the linear order LEDs are wired in to `(x, y)` grid
//! cells, so glyphs can be drawn in grid space without caring about strip
//! order. The reference digit panel's wiring is [`DIGIT_LAYOUT`].

/// Number of LEDs on the digit panel.
pub const PIXEL_COUNT: usize = 25;

/// Width and height of the digit panel.
pub const PANEL_SIZE: usize = 5;

/// How a rectangular `(x, y)` grid of LEDs maps to the linear order of LEDs
/// on a NeoPixel-style (WS2812) strip.
///
/// Coordinates use a screen-style convention: `(0, 0)` is the top-left
/// corner, `x` increases to the right, and `y` increases downward.
///
/// Layouts are validated at **compile time**: coordinates must be in bounds
/// and every cell must appear exactly once (the mapping is a bijection).
///
/// # Example
///
/// A serpentine-wired 5×5 panel whose strip enters at the bottom-right is the
/// standard row-major serpentine rotated a half turn:
///
/// ```rust
/// use digit_panel::layout::PanelLayout;
///
/// const PANEL: PanelLayout<25, 5, 5> = PanelLayout::serpentine_row_major().rotate_180();
/// assert_eq!(PANEL.index_to_xy()[0], (4, 4)); // LED 0 sits bottom-right
/// assert_eq!(PANEL.index_to_xy()[24], (0, 0)); // LED 24 sits top-left
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelLayout<const N: usize, const W: usize, const H: usize> {
    map: [(u16, u16); N],
}

impl<const N: usize, const W: usize, const H: usize> PanelLayout<N, W, H> {
    /// Constructor: verifies the mapping covers every cell of the W×H grid
    /// exactly once.
    #[must_use]
    pub const fn new(map: [(u16, u16); N]) -> Self {
        assert!(W > 0 && H > 0, "W and H must be positive");
        assert!(W * H == N, "W*H must equal N");

        let mut seen = [false; N];

        let mut i = 0;
        while i < N {
            let (col, row) = map[i];
            let col = col as usize;
            let row = row as usize;

            assert!(col < W, "column out of bounds");
            assert!(row < H, "row out of bounds");

            let cell = row * W + col;
            assert!(!seen[cell], "duplicate (col,row) in mapping");
            seen[cell] = true;

            i += 1;
        }

        let mut k = 0;
        while k < N {
            assert!(seen[k], "mapping does not cover every cell");
            k += 1;
        }

        Self { map }
    }

    /// The array mapping LED wiring order to `(x, y)` coordinates.
    #[must_use]
    pub const fn index_to_xy(&self) -> &[(u16, u16); N] {
        &self.map
    }

    /// The inverse mapping: for each row-major cell `(row * W + col)`, the
    /// physical LED index wired there.
    #[must_use]
    pub const fn xy_to_index(&self) -> [u16; N] {
        assert!(
            N <= u16::MAX as usize,
            "total LEDs must fit in u16 for xy_to_index"
        );

        let mut mapping = [None; N];

        let mut led_index = 0;
        while led_index < N {
            let (col, row) = self.map[led_index];
            let cell = (row as usize) * W + (col as usize);

            let slot = &mut mapping[cell];
            assert!(slot.is_none(), "duplicate (col,row) in xy_to_index inversion");
            *slot = Some(led_index as u16);

            led_index += 1;
        }

        let mut finalized = [0u16; N];
        let mut i = 0;
        while i < N {
            finalized[i] = mapping[i].expect("xy_to_index requires every (col,row) to be covered");
            i += 1;
        }

        finalized
    }

    /// Number of columns in the layout.
    #[must_use]
    pub const fn width(&self) -> usize {
        W
    }

    /// Number of rows in the layout.
    #[must_use]
    pub const fn height(&self) -> usize {
        H
    }

    /// Total number of LEDs in the layout.
    #[must_use]
    pub const fn len(&self) -> usize {
        N
    }

    /// Always false; layouts have at least one LED.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Const equality helper, usable in `const` assertions.
    #[must_use]
    pub const fn equals(&self, other: &Self) -> bool {
        let mut i = 0;
        while i < N {
            if self.map[i].0 != other.map[i].0 || self.map[i].1 != other.map[i].1 {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Serpentine row-major mapping: the strip snakes across rows, alternating
    /// left-to-right and right-to-left.
    ///
    /// ```text
    /// 3×2 example:
    ///   LED0  LED1  LED2
    ///   LED5  LED4  LED3
    /// ```
    #[must_use]
    pub const fn serpentine_row_major() -> Self {
        assert!(W > 0 && H > 0, "W and H must be positive");
        assert!(W * H == N, "W*H must equal N");

        let mut mapping = [(0_u16, 0_u16); N];
        let mut y_index = 0;
        while y_index < H {
            let mut x_index = 0;
            while x_index < W {
                let led_index = if y_index % 2 == 0 {
                    y_index * W + x_index
                } else {
                    y_index * W + (W - 1 - x_index)
                };
                mapping[led_index] = (x_index as u16, y_index as u16);
                x_index += 1;
            }
            y_index += 1;
        }
        Self::new(mapping)
    }

    /// Rotate 90° clockwise (dims swap).
    #[must_use]
    pub const fn rotate_cw(self) -> PanelLayout<N, H, W> {
        let mut out = [(0u16, 0u16); N];
        let mut i = 0;
        while i < N {
            let (col, row) = self.map[i];
            out[i] = ((H - 1 - row as usize) as u16, col);
            i += 1;
        }
        PanelLayout::<N, H, W>::new(out)
    }

    /// Rotate 180°, derived from two clockwise quarter turns.
    #[must_use]
    pub const fn rotate_180(self) -> Self {
        self.rotate_cw().rotate_cw()
    }
}

/// Wiring of the reference 5×5 digit panel.
///
/// The strip enters at the bottom-right corner and snakes upward, so each
/// row's wiring direction alternates (boustrophedon):
///
/// ```text
/// grid cell → physical LED index
///   24 23 22 21 20
///   15 16 17 18 19
///   14 13 12 11 10
///    5  6  7  8  9
///    4  3  2  1  0
/// ```
pub const DIGIT_LAYOUT: PanelLayout<PIXEL_COUNT, PANEL_SIZE, PANEL_SIZE> =
    PanelLayout::serpentine_row_major().rotate_180();
