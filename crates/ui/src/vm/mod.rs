mod quiz_vm;

pub use quiz_vm::{
    CategoryPickerVm, OptionVm, PrimaryAction, QuestionVm, QuizScreenVm, ResultsVm,
    EMPTY_BANK_MESSAGE, map_quiz_screen,
};
