use assetkit::Color;
use image::RgbImage;
use imageproc::filter::gaussian_blur_f32;
use rand::{Rng, rngs::SmallRng};

use crate::{config::BackgroundCfg, draw::px};

/// Optional post-processing applied after rendering, blur first.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Effects {
    pub blur_sigma: Option<f32>,
    pub brightness: Option<f32>,
}

impl Effects {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn sample(rng: &mut SmallRng, cfg: &BackgroundCfg) -> Self {
        let blur_sigma = rng
            .random_bool(cfg.blur_chance)
            .then(|| rng.random_range(cfg.blur_sigma.clone()));
        let brightness = rng
            .random_bool(cfg.brightness_chance)
            .then(|| rng.random_range(cfg.brightness.clone()));
        Self {
            blur_sigma,
            brightness,
        }
    }

    pub fn apply(&self, mut img: RgbImage) -> RgbImage {
        if let Some(sigma) = self.blur_sigma.filter(|s| *s > 0.0) {
            img = gaussian_blur_f32(&img, sigma);
        }
        if let Some(factor) = self.brightness {
            for p in img.pixels_mut() {
                let [r, g, b] = p.0;
                *p = px(Color::rgb(r, g, b).scale(factor as f64));
            }
        }
        img
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::canvas;
    use rand::SeedableRng;

    #[test]
    fn sampled_parameters_stay_in_range() {
        let cfg = BackgroundCfg::default();
        let mut rng = SmallRng::seed_from_u64(99);
        let (mut blurred, mut brightened) = (0, 0);
        for _ in 0..2000 {
            let fx = Effects::sample(&mut rng, &cfg);
            if let Some(s) = fx.blur_sigma {
                assert!((0.5..=2.0).contains(&s), "sigma {s}");
                blurred += 1;
            }
            if let Some(f) = fx.brightness {
                assert!((0.8..=1.2).contains(&f), "factor {f}");
                brightened += 1;
            }
        }
        // p = 0.5 and p = 0.3 over 2000 draws.
        assert!((800..1200).contains(&blurred), "{blurred}");
        assert!((450..750).contains(&brightened), "{brightened}");
    }

    #[test]
    fn none_is_identity() {
        let img = canvas(8, 8, Color::rgb(1, 2, 3));
        assert_eq!(Effects::none().apply(img.clone()), img);
    }

    #[test]
    fn brightness_scales_and_clamps() {
        let img = canvas(4, 4, Color::rgb(100, 220, 0));
        let fx = Effects {
            blur_sigma: None,
            brightness: Some(1.2),
        };
        let out = fx.apply(img);
        assert!(out.pixels().all(|p| p.0 == [120, 255, 0]));
    }

    #[test]
    fn blur_softens_an_edge_without_resizing() {
        let mut img = canvas(20, 20, Color::rgb(0, 0, 0));
        for y in 0..20 {
            for x in 10..20 {
                img.put_pixel(x, y, px(Color::rgb(255, 255, 255)));
            }
        }
        let fx = Effects {
            blur_sigma: Some(2.0),
            brightness: None,
        };
        let out = fx.apply(img);
        assert_eq!(out.dimensions(), (20, 20));
        let edge = out.get_pixel(9, 10).0[0];
        assert!(edge > 0 && edge < 255, "edge {edge}");
    }
}
