//! Buffer sizing.

use crate::traits::{Spin, XCFamily};

/// Number of values per point of each buffer, and the buffer lengths for a
/// given point count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferLayout {
    pub family: XCFamily,
    pub spin: Spin,
}

impl BufferLayout {
    pub fn new(family: XCFamily, spin: Spin) -> BufferLayout {
        BufferLayout { family, spin }
    }

    pub fn rho_stride(&self) -> usize {
        self.spin.nchannels()
    }

    pub fn sigma_stride(&self) -> usize {
        if self.family.needs_sigma() {
            self.spin.nsigma()
        } else {
            0
        }
    }

    pub fn exc_stride(&self) -> usize {
        1
    }

    pub fn vrho_stride(&self) -> usize {
        self.rho_stride()
    }

    pub fn vsigma_stride(&self) -> usize {
        self.sigma_stride()
    }

    pub fn rho_len(&self, npts: usize) -> usize {
        npts * self.rho_stride()
    }

    pub fn sigma_len(&self, npts: usize) -> usize {
        npts * self.sigma_stride()
    }

    pub fn exc_len(&self, npts: usize) -> usize {
        npts * self.exc_stride()
    }

    pub fn vrho_len(&self, npts: usize) -> usize {
        npts * self.vrho_stride()
    }

    pub fn vsigma_len(&self, npts: usize) -> usize {
        npts * self.vsigma_stride()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_lengths() {
        let n = 7;

        let lda = BufferLayout::new(XCFamily::LDA, Spin::Unpolarized);
        assert_eq!(
            [lda.rho_len(n), lda.sigma_len(n), lda.exc_len(n), lda.vrho_len(n), lda.vsigma_len(n)],
            [7, 0, 7, 7, 0]
        );

        let lsda = BufferLayout::new(XCFamily::LDA, Spin::Polarized);
        assert_eq!(
            [lsda.rho_len(n), lsda.sigma_len(n), lsda.exc_len(n), lsda.vrho_len(n), lsda.vsigma_len(n)],
            [14, 0, 7, 14, 0]
        );

        let gga = BufferLayout::new(XCFamily::GGA, Spin::Polarized);
        assert_eq!(
            [gga.rho_len(n), gga.sigma_len(n), gga.exc_len(n), gga.vrho_len(n), gga.vsigma_len(n)],
            [14, 21, 7, 14, 21]
        );

        let mgga = BufferLayout::new(XCFamily::MetaGGA, Spin::Unpolarized);
        assert_eq!(mgga.sigma_len(n), 7);
        assert_eq!(mgga.vsigma_len(0), 0);
    }
}
