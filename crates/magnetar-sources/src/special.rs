//! Physical constants and special functions shared by the field laws.

use std::f64::consts::{FRAC_PI_2, PI};

/// Vacuum permeability in mT·mm/A.
pub const MU0: f64 = 0.4 * PI;

pub(crate) const FOUR_PI: f64 = 4.0 * PI;

/// Generalized complete elliptic integral (Bulirsch's `cel`).
///
/// ```text
/// cel(kc, p, c, s) = ∫₀^{π/2} (c cos²φ + s sin²φ) /
///                    ((cos²φ + p sin²φ) sqrt(cos²φ + kc² sin²φ)) dφ
/// ```
///
/// `kc` must be non-zero; callers treat `kc == 0` as a geometric
/// singularity before getting here.
pub fn cel(kc: f64, p: f64, c: f64, s: f64) -> f64 {
    const TOL: f64 = 1e-12;
    const MAX_ITER: usize = 64;

    let mut k = kc.abs();
    let mut pp = p;
    let mut cc = c;
    let mut ss = s;
    let mut em = 1.0;

    if p > 0.0 {
        pp = p.sqrt();
        ss = s / pp;
    } else {
        let mut f = kc * kc;
        let mut q = 1.0 - f;
        let g = 1.0 - pp;
        f -= pp;
        q *= ss - c * pp;
        pp = (f / g).sqrt();
        cc = (c - ss) / g;
        ss = -q / (g * g * pp) + cc * pp;
    }

    let mut f = cc;
    cc += ss / pp;
    let mut g = k / pp;
    ss = 2.0 * (ss + f * g);
    pp += g;
    g = em;
    em += k;
    let mut kk = k;

    for _ in 0..MAX_ITER {
        if (g - k).abs() <= g * TOL {
            break;
        }
        k = 2.0 * kk.sqrt();
        kk = k * em;
        f = cc;
        cc += ss / pp;
        g = kk / pp;
        ss = 2.0 * (ss + f * g);
        pp += g;
        g = em;
        em += k;
    }

    FRAC_PI_2 * (ss + cc * em) / (em * (em + pp))
}

/// Complete elliptic integrals `(K(k), E(k))` from the complementary
/// modulus `kc = sqrt(1 - k²)`.
pub fn ellip_ke(kc: f64) -> (f64, f64) {
    (cel(kc, 1.0, 1.0, 1.0), cel(kc, 1.0, 1.0, kc * kc))
}
