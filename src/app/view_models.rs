use super::*;
use crate::view_models::{
    LeadFieldView, LeadStatusView, NavView, OptionView, QuestionView, ResultView,
};

impl QuizApp {
    pub fn question_view(&self) -> Option<QuestionView> {
        if self.session.is_finished() {
            return None;
        }
        let idx = self.session.current_index();
        let q = self.session.current_question()?;
        let selected = self.session.answer_for(idx);
        let total = self.session.question_count();

        Some(QuestionView {
            number: idx + 1,
            total,
            prompt: q.prompt.clone(),
            options: q
                .options
                .iter()
                .enumerate()
                .map(|(i, o)| OptionView {
                    idx: i,
                    label: o.text.clone(),
                    selected: selected == Some(i),
                })
                .collect(),
            progress: (idx + 1) as f32 / total as f32,
        })
    }

    pub fn nav_view(&self) -> NavView {
        let idx = self.session.current_index();
        NavView {
            previous_enabled: idx > 0 && !self.session.is_finished(),
            next_enabled: self.session.is_answered(idx),
            next_label: if self.session.is_last() {
                "See Results"
            } else {
                "Next"
            },
        }
    }

    pub fn result_view(&self) -> Option<ResultView> {
        let result = self.result().ok()?;
        Some(ResultView {
            shown_percentage: self
                .displayed_percentage()
                .unwrap_or(result.percentage as u32),
            percentage: result.percentage,
            color: result.tier.rgb().unwrap_or([0x10, 0xB9, 0x81]),
            tier: result.tier.name,
            message: result.tier.message,
        })
    }

    pub fn lead_status_view(&self) -> LeadStatusView {
        match &self.lead_status {
            LeadStatus::Editing => LeadStatusView::Editing {
                banner: self.lead_banner.clone(),
            },
            LeadStatus::Submitting(_) => LeadStatusView::Submitting,
            LeadStatus::Acknowledged { name } => LeadStatusView::Acknowledged { name: name.clone() },
        }
    }

    pub fn lead_field_views(&self) -> Vec<LeadFieldView> {
        LeadField::ALL
            .iter()
            .map(|&field| LeadFieldView {
                field,
                placeholder: field.placeholder(),
                error: self.lead_form.error(field),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    #[test]
    fn question_view_marks_selected_option_and_progress() {
        let mut a = app();
        let v = a.question_view().unwrap();
        assert_eq!((v.number, v.total), (1, 5));
        assert_eq!(v.counter_label(), "Question 1 of 5");
        assert!((v.progress - 0.2).abs() < f32::EPSILON);
        assert!(v.options.iter().all(|o| !o.selected));

        a.select_option(3).unwrap();
        let v = a.question_view().unwrap();
        let selected: Vec<usize> = v.options.iter().filter(|o| o.selected).map(|o| o.idx).collect();
        assert_eq!(selected, vec![3]);
    }

    #[test]
    fn revisited_question_shows_previous_answer() {
        let mut a = app();
        a.select_option(1).unwrap();
        a.go_next().unwrap();
        a.go_previous();
        let v = a.question_view().unwrap();
        assert!(v.options[1].selected);
        assert!(a.nav_view().next_enabled);
    }

    #[test]
    fn nav_buttons_follow_position_and_answers() {
        let mut a = app();
        let nav = a.nav_view();
        assert!(!nav.previous_enabled);
        assert!(!nav.next_enabled);
        assert_eq!(nav.next_label, "Next");

        a.select_option(0).unwrap();
        assert!(a.nav_view().next_enabled);
        a.go_next().unwrap();
        let nav = a.nav_view();
        assert!(nav.previous_enabled);
        assert!(!nav.next_enabled);

        for _ in 0..3 {
            a.select_option(0).unwrap();
            a.go_next().unwrap();
        }
        assert_eq!(a.nav_view().next_label, "See Results");
    }

    #[test]
    fn result_view_only_on_results() {
        let mut a = app();
        assert!(a.result_view().is_none());
        a.config.reduce_motion = true;
        finish_with(&mut a, 3);
        assert!(a.question_view().is_none());

        let r = a.result_view().unwrap();
        assert_eq!(r.percentage, 40);
        assert_eq!(r.shown_percentage, 40);
        assert_eq!(r.tier, "Growth Potential");
        assert_eq!(r.color, [0xF5, 0x9E, 0x0B]);
    }

    #[test]
    fn lead_views_reflect_form_state() {
        let mut a = app();
        finish_with(&mut a, 0);
        assert_eq!(a.lead_status_view(), LeadStatusView::Editing { banner: None });
        let _ = a.submit_lead();
        let fields = a.lead_field_views();
        assert_eq!(fields.len(), 3);
        assert!(fields.iter().all(|f| f.error == Some("This field is required")));

        fill_valid_lead(&mut a);
        assert!(a.lead_field_views().iter().all(|f| f.error.is_none()));
        a.submit_lead().unwrap();
        assert_eq!(a.lead_status_view(), LeadStatusView::Submitting);
        a.tick(5.0);
        let status = a.lead_status_view();
        assert_eq!(status.thank_you().as_deref(), Some("Thank you, Priya!"));
    }
}
