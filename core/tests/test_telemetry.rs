#[cfg(test)]
mod telemetry_snapshot_tests {
    use std::time::Duration;

    use classical_core::enigma::StandardMachines;
    use classical_core::telemetry::{Stage, StageTimes, TelemetryCounters, TelemetrySnapshot, TelemetryTimer};

    fn make_counters() -> TelemetryCounters {
        TelemetryCounters {
            messages: 2,
            symbols_in: 100,
            symbols_out: 101,
            padding_symbols: 1,
            rotor_steps: 0,
            double_steps: 0,
            resets: 0,
        }
    }

    fn make_timer() -> TelemetryTimer {
        let mut timer = TelemetryTimer::new();
        std::thread::sleep(Duration::from_millis(20)); // ensure elapsed > stage times
        timer.add_stage_time(Stage::Encrypt, Duration::from_millis(5));
        timer.add_stage_time(Stage::Decrypt, Duration::from_millis(10));
        timer.finish();
        timer
    }

    #[test]
    fn snapshot_copies_counters() {
        let snapshot = TelemetrySnapshot::from(&make_counters(), &make_timer());
        assert_eq!(snapshot.messages, 2);
        assert_eq!(snapshot.symbols_in, 100);
        assert_eq!(snapshot.padding_symbols, 1);
        assert!(snapshot.throughput_symbols_per_sec > 0.0);
    }

    #[test]
    fn snapshot_sanity_check_passes() {
        let snapshot = TelemetrySnapshot::from(&make_counters(), &make_timer());
        assert!(snapshot.sanity_check());
        assert_eq!(snapshot.total_stage_time(), Duration::from_millis(15));
    }

    #[test]
    fn sanity_check_catches_unexplained_growth() {
        let mut counters = make_counters();
        counters.padding_symbols = 0;
        let snapshot = TelemetrySnapshot::from(&counters, &make_timer());
        assert!(!snapshot.sanity_check());
    }

    #[test]
    fn stage_times_accumulate() {
        let mut times = StageTimes::default();
        times.add(Stage::Encrypt, Duration::from_millis(2));
        times.add(Stage::Encrypt, Duration::from_millis(3));
        assert_eq!(times.get(Stage::Encrypt), Duration::from_millis(5));
        assert_eq!(times.get(Stage::Decrypt), Duration::ZERO);
        assert!(times.has_all(&[Stage::Encrypt]));
        assert!(!times.has_all(&[Stage::Encrypt, Stage::Decrypt]));
        assert_eq!(times.iter().count(), 1);
        assert_eq!(Stage::Decrypt.to_string(), "decrypt");
    }

    #[test]
    fn counters_merge() {
        let mut a = make_counters();
        let b = TelemetryCounters { rotor_steps: 7, resets: 1, ..TelemetryCounters::default() };
        a.merge(&b);
        a += b.clone();
        assert_eq!(a.rotor_steps, 14);
        assert_eq!(a.resets, 2);
        assert_eq!(a.symbols_in, 100);
    }

    #[test]
    fn counters_bincode_round_trip() {
        let counters = make_counters();
        let bytes = bincode::encode_to_vec(&counters, bincode::config::standard()).unwrap();
        let (decoded, _): (TelemetryCounters, usize) =
            bincode::decode_from_slice(&bytes, bincode::config::standard()).unwrap();
        assert_eq!(decoded, counters);
    }

    #[test]
    fn machine_snapshot_is_consistent() {
        let mut machine = StandardMachines::enigma_i().unwrap().with_auto_reset(true);
        machine.set_key("AAA").unwrap();

        let timer = TelemetryTimer::new();
        for _ in 0..10 {
            machine.encrypt("HELLOWORLD").unwrap();
        }
        let mut timer = timer;
        timer.finish();

        let snapshot = TelemetrySnapshot::from(machine.telemetry(), &timer);
        assert_eq!(snapshot.messages, 10);
        assert_eq!(snapshot.symbols_out, 100);
        assert!(snapshot.rotor_steps >= 100);
        assert!(snapshot.sanity_check());

        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"rotor_steps\""));
    }
}
