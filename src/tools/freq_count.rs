/// Count of every byte value in a block of data.
pub type Histogram = [u64; 256];

/// Returns a frequency count of the input data.
pub fn freqs(data: &[u8]) -> Histogram {
    let mut freqs = [0_u64; 256];
    data.iter().for_each(|&el| freqs[el as usize] += 1);
    freqs
}
