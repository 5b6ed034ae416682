use flashdeck_lib::deck::{
    Flashcard, NewCategory, ValidationErrors, ACCENT_PALETTE, DEFAULT_ACCENT, SUGGESTED_DEPARTMENTS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Department,
    Accent,
    Image,
    Description,
    Question(usize),
    Answer(usize),
}

impl FormField {
    /// Key used by registry validation errors
    pub fn key(&self) -> String {
        match self {
            FormField::Name => "name".to_string(),
            FormField::Department => "department".to_string(),
            FormField::Accent => "accent".to_string(),
            FormField::Image => "image".to_string(),
            FormField::Description => "description".to_string(),
            FormField::Question(i) => format!("question_{}", i),
            FormField::Answer(i) => format!("answer_{}", i),
        }
    }

    pub fn label(&self) -> String {
        match self {
            FormField::Name => "Name".to_string(),
            FormField::Department => "Department".to_string(),
            FormField::Accent => "Accent".to_string(),
            FormField::Image => "Image".to_string(),
            FormField::Description => "Description".to_string(),
            FormField::Question(i) => format!("Question {}", i + 1),
            FormField::Answer(i) => format!("Answer {}", i + 1),
        }
    }
}

/// Input state of the add-category form
#[derive(Debug, Clone)]
pub struct AddForm {
    pub name: String,
    pub department: String,
    pub accent_index: usize,
    pub image: String,
    pub description: String,
    pub cards: Vec<Flashcard>,
    pub focus: usize,
    pub errors: ValidationErrors,
}

impl Default for AddForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            department: String::new(),
            accent_index: ACCENT_PALETTE
                .iter()
                .position(|c| *c == DEFAULT_ACCENT)
                .unwrap_or(0),
            image: String::new(),
            description: String::new(),
            cards: vec![Flashcard::new("", "")],
            focus: 0,
            errors: ValidationErrors::default(),
        }
    }
}

impl AddForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn fields(&self) -> Vec<FormField> {
        let mut fields = vec![
            FormField::Name,
            FormField::Department,
            FormField::Accent,
            FormField::Image,
            FormField::Description,
        ];
        for i in 0..self.cards.len() {
            fields.push(FormField::Question(i));
            fields.push(FormField::Answer(i));
        }
        fields
    }

    pub fn focused(&self) -> FormField {
        let fields = self.fields();
        fields[self.focus.min(fields.len() - 1)]
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.fields().len();
    }

    pub fn focus_prev(&mut self) {
        let len = self.fields().len();
        self.focus = (self.focus + len - 1) % len;
    }

    pub fn accent(&self) -> &'static str {
        ACCENT_PALETTE[self.accent_index % ACCENT_PALETTE.len()]
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Department => &self.department,
            FormField::Accent => self.accent(),
            FormField::Image => &self.image,
            FormField::Description => &self.description,
            FormField::Question(i) => self.cards.get(i).map_or("", |c| c.question.as_str()),
            FormField::Answer(i) => self.cards.get(i).map_or("", |c| c.answer.as_str()),
        }
    }

    fn input_mut(&mut self) -> Option<&mut String> {
        match self.focused() {
            FormField::Name => Some(&mut self.name),
            FormField::Department => Some(&mut self.department),
            FormField::Accent => None,
            FormField::Image => Some(&mut self.image),
            FormField::Description => Some(&mut self.description),
            FormField::Question(i) => self.cards.get_mut(i).map(|c| &mut c.question),
            FormField::Answer(i) => self.cards.get_mut(i).map(|c| &mut c.answer),
        }
    }

    fn clear_error(&mut self) {
        let key = self.focused().key();
        self.errors.fields.retain(|e| e.field != key);
    }

    pub fn insert_char(&mut self, c: char) {
        if let Some(input) = self.input_mut() {
            input.push(c);
            self.clear_error();
        }
    }

    pub fn backspace(&mut self) {
        if let Some(input) = self.input_mut() {
            input.pop();
        }
    }

    /// Left/Right on the accent or department field cycles the choices.
    pub fn cycle(&mut self, forward: bool) {
        match self.focused() {
            FormField::Accent => {
                let len = ACCENT_PALETTE.len();
                self.accent_index = if forward {
                    (self.accent_index + 1) % len
                } else {
                    (self.accent_index + len - 1) % len
                };
            }
            FormField::Department => {
                let len = SUGGESTED_DEPARTMENTS.len();
                let current = SUGGESTED_DEPARTMENTS
                    .iter()
                    .position(|d| d.eq_ignore_ascii_case(self.department.trim()));
                let next = match (current, forward) {
                    (None, true) => 0,
                    (None, false) => len - 1,
                    (Some(i), true) => (i + 1) % len,
                    (Some(i), false) => (i + len - 1) % len,
                };
                self.department = SUGGESTED_DEPARTMENTS[next].to_string();
                self.clear_error();
            }
            _ => {}
        }
    }

    /// Append an empty question/answer pair and focus its question.
    pub fn add_card(&mut self) {
        self.cards.push(Flashcard::new("", ""));
        self.focus = self.fields().len() - 2;
    }

    /// Remove the pair under focus. The last remaining pair is kept.
    pub fn remove_card(&mut self) {
        if self.cards.len() <= 1 {
            return;
        }
        let index = match self.focused() {
            FormField::Question(i) | FormField::Answer(i) => i,
            _ => return,
        };
        self.cards.remove(index);
        self.errors = ValidationErrors::default();
        self.focus = self.focus.min(self.fields().len() - 1);
    }

    pub fn error_for(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field.key())
    }

    pub fn to_draft(&self) -> NewCategory {
        let mut draft = NewCategory::new(self.name.clone(), self.department.clone())
            .with_accent(self.accent())
            .with_image(self.image.clone())
            .with_description(self.description.clone());
        draft.flashcards = self.cards.clone();
        draft
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(form: &mut AddForm, text: &str) {
        for c in text.chars() {
            form.insert_char(c);
        }
    }

    #[test]
    fn test_focus_wraps_over_fields() {
        let mut form = AddForm::default();
        assert_eq!(form.fields().len(), 7);
        form.focus_prev();
        assert_eq!(form.focused(), FormField::Answer(0));
        form.focus_next();
        assert_eq!(form.focused(), FormField::Name);
    }

    #[test]
    fn test_typing_fills_focused_field() {
        let mut form = AddForm::default();
        type_text(&mut form, "Chem");
        form.backspace();
        assert_eq!(form.name, "Che");

        form.focus = 2;
        type_text(&mut form, "ignored");
        assert_eq!(form.accent(), DEFAULT_ACCENT);
    }

    #[test]
    fn test_cycle_department_and_accent() {
        let mut form = AddForm::default();
        form.focus = 1;
        form.cycle(true);
        assert_eq!(form.department, "Science");
        form.cycle(false);
        assert_eq!(form.department, "Technology");

        form.focus = 2;
        form.cycle(true);
        assert_eq!(form.accent(), "#006CA5");
    }

    #[test]
    fn test_add_and_remove_cards() {
        let mut form = AddForm::default();
        form.add_card();
        assert_eq!(form.cards.len(), 2);
        assert_eq!(form.focused(), FormField::Question(1));

        form.remove_card();
        assert_eq!(form.cards.len(), 1);
        form.remove_card();
        assert_eq!(form.cards.len(), 1);
    }

    #[test]
    fn test_draft_carries_fields() {
        let mut form = AddForm::default();
        type_text(&mut form, "Poetry");
        form.focus = 5;
        type_text(&mut form, "Who wrote The Raven?");
        form.focus = 6;
        type_text(&mut form, "Poe");

        let draft = form.to_draft();
        assert_eq!(draft.name, "Poetry");
        assert_eq!(draft.accent_color.as_deref(), Some(DEFAULT_ACCENT));
        assert_eq!(draft.flashcards, vec![Flashcard::new("Who wrote The Raven?", "Poe")]);
    }
}
