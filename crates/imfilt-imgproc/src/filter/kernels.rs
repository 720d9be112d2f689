/// A fixed 3x3 kernel of integer weights.
///
/// `divisor` normalizes the weighted sum. Only the blur kernel uses it; the
/// gradient kernels keep a divisor of 1 and are combined through their magnitude.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Kernel {
    /// Weights indexed as `weights[ky][kx]`.
    pub weights: [[i32; 3]; 3],
    /// Normalization divisor applied to the weighted sum.
    pub divisor: i32,
}

impl Kernel {
    /// Sum of all the weights.
    pub fn sum(&self) -> i32 {
        self.weights.iter().flatten().sum()
    }

    /// Weight at kernel row `ky` and column `kx`.
    #[inline]
    pub fn weight(&self, ky: usize, kx: usize) -> i32 {
        self.weights[ky][kx]
    }
}

/// Binomial approximation of a gaussian, normalized by the sum of its weights.
pub const GAUSSIAN_3X3: Kernel = Kernel {
    weights: [[1, 2, 1], [2, 4, 2], [1, 2, 1]],
    divisor: 16,
};

/// Sobel horizontal gradient.
pub const SOBEL_X: Kernel = Kernel {
    weights: [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]],
    divisor: 1,
};

/// Sobel vertical gradient.
pub const SOBEL_Y: Kernel = Kernel {
    weights: [[-1, -2, -1], [0, 0, 0], [1, 2, 1]],
    divisor: 1,
};

/// Prewitt horizontal gradient.
pub const PREWITT_X: Kernel = Kernel {
    weights: [[-1, 0, 1], [-1, 0, 1], [-1, 0, 1]],
    divisor: 1,
};

/// Prewitt vertical gradient.
pub const PREWITT_Y: Kernel = Kernel {
    weights: [[-1, -1, -1], [0, 0, 0], [1, 1, 1]],
    divisor: 1,
};
