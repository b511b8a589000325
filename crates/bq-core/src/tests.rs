//! Unit tests for bq-core primitives.

#[cfg(test)]
mod ids {
    use crate::{CustomerId, PoolId};

    #[test]
    fn index_matches_inner_value() {
        assert_eq!(PoolId(3).index(), 3);
        assert_eq!(CustomerId(41).index(), 41);
    }

    #[test]
    fn customer_ids_follow_arrival_order() {
        let first = CustomerId(0);
        assert!(first < first.next());
        assert_eq!(first.next(), CustomerId(1));
    }

    #[test]
    fn display() {
        assert_eq!(CustomerId(7).to_string(), "customer#7");
        assert_eq!(PoolId(1).to_string(), "pool#1");
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, SimTime};

    #[test]
    fn time_arithmetic() {
        let t = SimTime(10.0);
        assert_eq!(t + 2.5, SimTime(12.5));
        assert_eq!(t.offset(0.0), t);
        assert_eq!(SimTime(12.5) - SimTime(10.0), 2.5);
        assert_eq!(SimTime(12.5).since(SimTime(10.0)), 2.5);
    }

    #[test]
    fn since_never_negative() {
        assert_eq!(SimTime(1.0).since(SimTime(2.0)), 0.0);
    }

    #[test]
    fn total_order() {
        let mut v = vec![SimTime(3.0), SimTime(0.5), SimTime(2.0), SimTime::ZERO];
        v.sort();
        assert_eq!(v, vec![SimTime::ZERO, SimTime(0.5), SimTime(2.0), SimTime(3.0)]);
    }

    #[test]
    fn clock_advances() {
        let mut clock = SimClock::new();
        assert_eq!(clock.now(), SimTime::ZERO);
        clock.advance_to(SimTime(4.25));
        assert_eq!(clock.now(), SimTime(4.25));
        clock.advance_to(SimTime(4.25));
        assert_eq!(clock.now(), SimTime(4.25));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "clock moved backwards")]
    fn clock_rejects_going_back() {
        let mut clock = SimClock::new();
        clock.advance_to(SimTime(5.0));
        clock.advance_to(SimTime(1.0));
    }

    #[test]
    fn display() {
        assert_eq!(SimTime(1.5).to_string(), "t=1.500");
    }
}

#[cfg(test)]
mod rng {
    use crate::{RunStreams, SimRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.uniform(), r2.uniform());
        }
    }

    #[test]
    fn splits_are_reproducible_and_distinct() {
        let mut root_a = SimRng::new(7);
        let mut root_b = SimRng::new(7);
        let mut a0 = root_a.split(0);
        let mut a1 = root_a.split(1);
        let mut b0 = root_b.split(0);
        let x = a0.uniform();
        assert_eq!(x, b0.uniform());
        assert_ne!(x, a1.uniform());
    }

    #[test]
    fn run_streams_differ_per_concern() {
        let mut a = RunStreams::from_seed(42);
        let mut b = RunStreams::from_seed(42);
        let (x, y, z) = (a.arrivals.uniform(), a.service.uniform(), a.routing.uniform());
        assert_eq!(x, b.arrivals.uniform());
        assert_eq!(y, b.service.uniform());
        assert_eq!(z, b.routing.uniform());
        assert!(x != y && y != z && x != z);
    }

    #[test]
    fn chance_respects_bounds() {
        let mut rng = SimRng::new(3);
        for _ in 0..1000 {
            assert!(!rng.chance(0.0));
            assert!(rng.chance(1.0));
        }
    }

    #[test]
    fn uniform_in_unit_interval() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.uniform();
            assert!((0.0..1.0).contains(&v));
        }
    }
}

#[cfg(test)]
mod dists {
    use crate::{CoreError, Exponential, SimRng};

    #[test]
    fn rejects_bad_rates() {
        for rate in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                Exponential::new(rate),
                Err(CoreError::InvalidConfiguration(_))
            ));
        }
    }

    #[test]
    fn sample_mean_close_to_inverse_rate() {
        let exp = Exponential::new(0.25).unwrap();
        assert_eq!(exp.mean(), 4.0);
        let mut rng = SimRng::new(99);
        let n = 50_000;
        let total: f64 = (0..n).map(|_| exp.sample(&mut rng)).sum();
        let mean = total / n as f64;
        assert!((mean - 4.0).abs() < 0.15, "got {mean}");
    }

    #[test]
    fn samples_are_non_negative() {
        let exp = Exponential::new(3.0).unwrap();
        let mut rng = SimRng::new(1);
        assert!((0..1000).all(|_| exp.sample(&mut rng) >= 0.0));
    }
}

#[cfg(test)]
mod config {
    use crate::{
        CoreError, PolicyConfig, PoolId, RateConfig, RunConfig, EXPRESS_POOL, REGULAR_POOL,
    };

    fn single(servers: u32, arrival: f64, service: f64) -> RunConfig {
        RunConfig::new(
            PolicyConfig::Single { servers },
            RateConfig::uniform(arrival, service),
            480.0,
            42,
        )
    }

    fn is_invalid(cfg: &RunConfig) -> bool {
        matches!(cfg.validate(), Err(CoreError::InvalidConfiguration(_)))
    }

    #[test]
    fn single_pool_resolves() {
        let specs = single(3, 0.2, 0.25).pool_specs().unwrap();
        assert_eq!(specs.len(), 1);
        assert_eq!(specs[0].capacity, 3);
        assert_eq!(specs[0].service_rate, 0.25);
    }

    #[test]
    fn shortest_queue_broadcasts_one_rate() {
        let cfg = RunConfig::new(
            PolicyConfig::ShortestQueue { queues: 3 },
            RateConfig::uniform(0.25, 0.33),
            480.0,
            1,
        );
        let specs = cfg.pool_specs().unwrap();
        assert_eq!(specs.len(), 3);
        assert!(specs.iter().all(|s| s.capacity == 1 && s.service_rate == 0.33));
        assert_eq!(specs[2].id, PoolId(2));
    }

    #[test]
    fn shortest_queue_accepts_per_queue_rates() {
        let cfg = RunConfig::new(
            PolicyConfig::ShortestQueue { queues: 2 },
            RateConfig { arrival_rate: 0.25, service_rates: vec![0.3, 0.5] },
            480.0,
            1,
        );
        let specs = cfg.pool_specs().unwrap();
        assert_eq!(specs[1].service_rate, 0.5);
    }

    #[test]
    fn express_regular_resolves_two_pools() {
        let cfg = RunConfig::new(
            PolicyConfig::ExpressRegular { express_servers: 1, regular_servers: 2, prob_express: 0.3 },
            RateConfig::express_regular(0.25, 0.5, 0.25),
            480.0,
            1,
        );
        let specs = cfg.pool_specs().unwrap();
        assert_eq!(specs[EXPRESS_POOL.index()].service_rate, 0.5);
        assert_eq!(specs[REGULAR_POOL.index()].capacity, 2);
        assert_eq!(cfg.policy.total_servers(), 3);
        assert_eq!(cfg.policy.prob_express(), Some(0.3));
    }

    #[test]
    fn rejects_non_positive_rates() {
        assert!(is_invalid(&single(3, 0.0, 0.25)));
        assert!(is_invalid(&single(3, 0.2, -0.25)));
        assert!(is_invalid(&single(3, f64::NAN, 0.25)));
    }

    #[test]
    fn rejects_zero_capacity() {
        assert!(is_invalid(&single(0, 0.2, 0.25)));
        let cfg = RunConfig::new(
            PolicyConfig::ShortestQueue { queues: 0 },
            RateConfig::uniform(0.25, 0.33),
            480.0,
            1,
        );
        assert!(is_invalid(&cfg));
    }

    #[test]
    fn rejects_prob_outside_unit_interval() {
        for p in [-0.1, 1.1, f64::NAN] {
            let cfg = RunConfig::new(
                PolicyConfig::ExpressRegular { express_servers: 1, regular_servers: 2, prob_express: p },
                RateConfig::express_regular(0.25, 0.5, 0.25),
                480.0,
                1,
            );
            assert!(is_invalid(&cfg), "prob_express {p} accepted");
        }
    }

    #[test]
    fn accepts_prob_at_bounds() {
        for p in [0.0, 1.0] {
            let cfg = RunConfig::new(
                PolicyConfig::ExpressRegular { express_servers: 1, regular_servers: 1, prob_express: p },
                RateConfig::express_regular(0.25, 0.5, 0.25),
                480.0,
                1,
            );
            assert!(cfg.validate().is_ok());
        }
    }

    #[test]
    fn rejects_wrong_rate_count() {
        let cfg = RunConfig::new(
            PolicyConfig::Single { servers: 2 },
            RateConfig { arrival_rate: 0.2, service_rates: vec![0.25, 0.5] },
            480.0,
            1,
        );
        assert!(is_invalid(&cfg));

        let cfg = RunConfig::new(
            PolicyConfig::ShortestQueue { queues: 3 },
            RateConfig { arrival_rate: 0.2, service_rates: vec![0.25, 0.5] },
            480.0,
            1,
        );
        assert!(is_invalid(&cfg));
    }

    #[test]
    fn horizon_bounds() {
        let mut cfg = single(1, 0.2, 0.25);
        cfg.horizon = 0.0;
        assert!(cfg.validate().is_ok());
        cfg.horizon = -1.0;
        assert!(is_invalid(&cfg));
        cfg.horizon = f64::INFINITY;
        assert!(is_invalid(&cfg));
    }

    #[test]
    fn topology_names() {
        assert_eq!(PolicyConfig::Single { servers: 1 }.topology(), "single");
        assert_eq!(PolicyConfig::ShortestQueue { queues: 1 }.topology(), "n_queues");
    }
}

#[cfg(test)]
mod theory {
    use crate::theory::{erlang_c, mmc_mean_system_time, mmc_mean_wait, utilization};

    #[test]
    fn mm1_matches_textbook() {
        // ρ = 0.5: P(wait) = ρ, Wq = ρ / (μ − λ) = 1, W = 2.
        assert!((erlang_c(1, 0.5, 1.0).unwrap() - 0.5).abs() < 1e-12);
        assert!((mmc_mean_wait(1, 0.5, 1.0).unwrap() - 1.0).abs() < 1e-12);
        assert!((mmc_mean_system_time(1, 0.5, 1.0).unwrap() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn mm2_matches_textbook() {
        // a = 1, c = 2: P(wait) = 1/3, Wq = 1/3.
        assert!((erlang_c(2, 1.0, 1.0).unwrap() - 1.0 / 3.0).abs() < 1e-12);
        assert!((mmc_mean_wait(2, 1.0, 1.0).unwrap() - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn unstable_has_no_answer() {
        assert!(erlang_c(1, 1.0, 1.0).is_none());
        assert!(mmc_mean_wait(2, 3.0, 1.0).is_none());
        assert!(erlang_c(0, 0.1, 1.0).is_none());
    }

    #[test]
    fn utilization_formula() {
        let u = utilization(3, 0.2, 0.25);
        assert!((u - 0.2 / 0.75).abs() < 1e-12);
    }
}
