// self
use crate::obs::{FailureClass, RequestOutcome};

/// Records a request outcome via the global metrics recorder (when enabled).
pub fn record_request_outcome(outcome: RequestOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!("console_session_request_total", "outcome" => outcome.as_str())
			.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = outcome;
	}
}

/// Records the class of a failed response (when enabled).
pub fn record_failure_class(class: FailureClass) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!("console_session_failure_total", "class" => class.as_str()).increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = class;
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn recorders_noop_without_metrics() {
		record_request_outcome(RequestOutcome::Failure);
		record_failure_class(FailureClass::ServerError);
	}
}
