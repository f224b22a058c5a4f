//! End-to-end tests for the prediction pipeline

#[cfg(test)]
mod integration_tests {
    use std::collections::HashMap;

    use crate::logic::features::{Feature, FeatureRow};
    use crate::logic::model::stub::StubClassifier;
    use crate::logic::model::InferenceError;
    use crate::logic::pipeline::{
        build_row_from_manual_selection, load_row_from_csv, predict, run, PipelineError,
        PredictionResult,
    };

    fn rows() -> Vec<FeatureRow> {
        vec![
            FeatureRow::from_codes([1, 0, 0, 1, 0, 1, 0, 1, 2, 1, 0, 0, 1]).unwrap(),
            FeatureRow::from_codes([0, 5, 2, 0, 1, 0, 1, 3, 1, 3, 2, 1, 3]).unwrap(),
            FeatureRow::from_codes([1, 3, 1, 1, 1, 1, 0, 2, 2, 2, 1, 0, 2]).unwrap(),
        ]
    }

    #[test]
    fn test_predict_maps_zero_to_cannot_adapt() {
        let model = StubClassifier::returning(0);
        for row in rows() {
            assert_eq!(predict(&row, &model), Ok(PredictionResult::CannotAdapt));
        }
    }

    #[test]
    fn test_predict_maps_one_to_can_adapt() {
        let model = StubClassifier::returning(1);
        for row in rows() {
            assert_eq!(predict(&row, &model), Ok(PredictionResult::CanAdapt));
        }
    }

    #[test]
    fn test_run_produces_inputs_and_verdict() {
        let model = StubClassifier::returning(1);
        let outcome = run(&rows()[0], &model).unwrap();

        assert_eq!(outcome.prediction, PredictionResult::CanAdapt);
        assert_eq!(outcome.inputs.len(), 13);
        assert_eq!(outcome.inputs[0].feature, Feature::Gender);
        assert_eq!(outcome.inputs[0].value, "Boy");
        assert_eq!(outcome.inputs[12].value, "Tab");
    }

    #[test]
    fn test_run_has_no_partial_result_on_inference_failure() {
        let model = StubClassifier::failing("session poisoned");
        let err = run(&rows()[1], &model).unwrap_err();
        assert_eq!(
            err,
            PipelineError::Inference(InferenceError("session poisoned".to_string()))
        );
    }

    #[test]
    fn test_manual_selection_through_to_verdict() {
        let selection: HashMap<Feature, &str> = HashMap::from([
            (Feature::Gender, "Girl"),
            (Feature::Age, "21-25"),
            (Feature::EducationLevel, "University"),
            (Feature::InstitutionType, "Non Government"),
            (Feature::ItStudent, "Yes"),
            (Feature::LocationInTown, "Yes"),
            (Feature::LoadShedding, "Low"),
            (Feature::FinancialCondition, "Mid"),
            (Feature::InternetType, "Wifi"),
            (Feature::NetworkType, "4G"),
            (Feature::ClassDuration, "1-3"),
            (Feature::SelfLms, "No"),
            (Feature::Device, "Computer"),
        ]);
        let row = build_row_from_manual_selection(&selection).unwrap();
        let outcome = run(&row, &StubClassifier::returning(0)).unwrap();

        assert_eq!(outcome.prediction.message(), "Prediction of this app is Cannot Adaptive");
        assert_eq!(outcome.inputs[1].value, "21-25");
        assert_eq!(outcome.inputs[8].value, "Wifi");
    }

    #[test]
    fn test_uploaded_row_through_to_verdict() {
        let csv = "Device,Self LMS,Class Duration,Network Type,Internet Type,Financial Condition,Load-shedding,Location in Town,IT Student,Institution Type,Education Level,Age,Gender\n\
                   2,1,2,3,1,3,1,0,1,0,2,5,0\n";
        let row = load_row_from_csv(csv.as_bytes()).unwrap();
        let outcome = run(&row, &StubClassifier::returning(1)).unwrap();

        assert_eq!(row.codes(), &[0, 5, 2, 0, 1, 0, 1, 3, 1, 3, 2, 1, 2]);
        assert_eq!(outcome.inputs[12].value, "Mobile");
        assert!(outcome.prediction.can_adapt());
    }
}
