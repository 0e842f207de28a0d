//! CLI output formatting tests.

#[cfg(test)]
mod text_formatter_tests {
    use super::super::text::TextFormatter;
    use mackerel_core::{Host, Metric};

    #[test]
    fn test_format_hosts() {
        let hosts = vec![
            Host::new("host1", "test-host-1"),
            Host::new("host2", "test-host-2"),
        ];

        let output = TextFormatter::new().format_hosts(&hosts);
        assert_eq!(
            output,
            "Available hosts:\nID: host1, Name: test-host-1\nID: host2, Name: test-host-2\n"
        );
    }

    #[test]
    fn test_format_hosts_empty() {
        assert_eq!(TextFormatter::new().format_hosts(&[]), "Available hosts:\n");
    }

    #[test]
    fn test_format_host_with_empty_name() {
        let line = TextFormatter::new().format_host_line(&Host::new("host1", ""));
        assert_eq!(line, "ID: host1, Name: ");
    }

    #[test]
    fn test_format_metrics() {
        let metrics = vec![Metric::new("loadavg5"), Metric::new("cpu.user.percentage")];

        let output = TextFormatter::new().format_metrics("host1", &metrics);
        assert_eq!(
            output,
            "Metrics for host host1:\nloadavg5\ncpu.user.percentage\n"
        );
    }
}

#[cfg(test)]
mod json_formatter_tests {
    use super::super::json::JsonFormatter;
    use mackerel_core::{Host, Metric};
    use serde_json::{Value, json};

    #[test]
    fn test_format_hosts_compact() {
        let hosts = vec![Host::new("host1", "test-host-1")];

        let output = JsonFormatter::new(false).format_hosts(&hosts).unwrap();
        assert_eq!(
            output,
            "{\"hosts\":[{\"id\":\"host1\",\"name\":\"test-host-1\"}]}\n"
        );
    }

    #[test]
    fn test_format_metrics_pretty() {
        let metrics = vec![Metric::new("metric1"), Metric::new("metric2")];

        let output = JsonFormatter::new(true)
            .format_metrics("host1", &metrics)
            .unwrap();
        assert!(output.contains('\n'));

        let parsed: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(
            parsed,
            json!({
                "hostId": "host1",
                "metrics": [{"name": "metric1"}, {"name": "metric2"}]
            })
        );
    }
}
