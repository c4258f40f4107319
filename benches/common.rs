pub const SIZES: [usize; 3] = [1 << 10, 1 << 14, 1 << 18];
