//! Sortable, selectable appointment table.

use serde::{Deserialize, Serialize};

/// Sort direction of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Sortable columns of the appointment table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Column {
    Name,
    Time,
    Department,
    Doctor,
    Status,
    Fee,
}

impl Column {
    pub const ALL: [Column; 6] = [
        Column::Name,
        Column::Time,
        Column::Department,
        Column::Doctor,
        Column::Status,
        Column::Fee,
    ];

    pub fn header(&self) -> &'static str {
        match self {
            Column::Name => "姓名",
            Column::Time => "就诊时间",
            Column::Department => "科室",
            Column::Doctor => "主治医生",
            Column::Status => "状态",
            Column::Fee => "费用",
        }
    }
}

/// One appointment row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: u32,
    pub name: String,
    pub time: String,
    pub department: String,
    pub doctor: String,
    pub status: String,
    pub fee: String,
}

impl Appointment {
    pub fn cell(&self, column: Column) -> &str {
        match column {
            Column::Name => &self.name,
            Column::Time => &self.time,
            Column::Department => &self.department,
            Column::Doctor => &self.doctor,
            Column::Status => &self.status,
            Column::Fee => &self.fee,
        }
    }
}

/// Table state: rows, sort and row selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableState {
    rows: Vec<Appointment>,
    sort: Option<(Column, SortDirection)>,
    selected: Vec<u32>,
}

impl TableState {
    pub fn new(rows: Vec<Appointment>) -> Self {
        Self {
            rows,
            ..Default::default()
        }
    }

    pub fn sort(&self) -> Option<(Column, SortDirection)> {
        self.sort
    }

    /// Direction shown on a column header, if it is the sorted column
    pub fn sorted(&self, column: Column) -> Option<SortDirection> {
        self.sort
            .and_then(|(sorted, direction)| (sorted == column).then_some(direction))
    }

    /// Header click: none → asc → desc → none; another column restarts at asc
    pub fn toggle_sort(&mut self, column: Column) {
        self.sort = match self.sort {
            Some((current, SortDirection::Asc)) if current == column => {
                Some((column, SortDirection::Desc))
            }
            Some((current, SortDirection::Desc)) if current == column => None,
            _ => Some((column, SortDirection::Asc)),
        };
    }

    /// Rows in display order. Ties keep their original order.
    pub fn rows(&self) -> Vec<&Appointment> {
        let mut rows: Vec<&Appointment> = self.rows.iter().collect();
        if let Some((column, direction)) = self.sort {
            rows.sort_by(|a, b| {
                let ordering = a.cell(column).cmp(b.cell(column));
                match direction {
                    SortDirection::Asc => ordering,
                    SortDirection::Desc => ordering.reverse(),
                }
            });
        }
        rows
    }

    pub fn is_selected(&self, id: u32) -> bool {
        self.selected.contains(&id)
    }

    pub fn all_selected(&self) -> bool {
        !self.rows.is_empty() && self.selected.len() == self.rows.len()
    }

    /// Header checkbox: select everything, or clear when all are selected
    pub fn toggle_all(&mut self) {
        if self.all_selected() {
            self.selected.clear();
        } else {
            self.selected = self.rows.iter().map(|row| row.id).collect();
        }
    }

    pub fn toggle_row(&mut self, id: u32) {
        if self.is_selected(id) {
            self.selected.retain(|row| *row != id);
        } else if self.rows.iter().any(|row| row.id == id) {
            self.selected.push(id);
        }
    }
}

/// Appointment rows used by the gallery demo
pub fn demo_appointments() -> Vec<Appointment> {
    let rows = [
        (1, "张三", "2024-02-20 09:00", "内科", "王医生", "已完成", "￥150"),
        (2, "李四", "2024-02-21 14:30", "外科", "刘医生", "待就诊", "￥200"),
        (3, "王五", "2024-02-22 10:00", "儿科", "陈医生", "已取消", "￥180"),
        (4, "赵六", "2024-02-23 15:00", "骨科", "林医生", "待付款", "￥250"),
        (5, "孙七", "2024-02-24 11:30", "眼科", "张医生", "已完成", "￥160"),
    ];
    rows.into_iter()
        .map(|(id, name, time, department, doctor, status, fee)| Appointment {
            id,
            name: name.to_string(),
            time: time.to_string(),
            department: department.to_string(),
            doctor: doctor.to_string(),
            status: status.to_string(),
            fee: fee.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(state: &TableState) -> Vec<u32> {
        state.rows().iter().map(|row| row.id).collect()
    }

    #[test]
    fn sort_cycle() {
        let mut state = TableState::new(demo_appointments());
        state.toggle_sort(Column::Fee);
        assert_eq!(state.sorted(Column::Fee), Some(SortDirection::Asc));
        assert_eq!(ids(&state), vec![1, 5, 3, 2, 4]);

        state.toggle_sort(Column::Fee);
        assert_eq!(ids(&state), vec![4, 2, 3, 5, 1]);

        state.toggle_sort(Column::Fee);
        assert_eq!(state.sort(), None);
        assert_eq!(ids(&state), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn other_column_restarts_at_asc() {
        let mut state = TableState::new(demo_appointments());
        state.toggle_sort(Column::Fee);
        state.toggle_sort(Column::Fee);
        state.toggle_sort(Column::Time);
        assert_eq!(state.sort(), Some((Column::Time, SortDirection::Asc)));
        assert_eq!(state.sorted(Column::Fee), None);
    }

    #[test]
    fn select_all_toggles() {
        let mut state = TableState::new(demo_appointments());
        state.toggle_row(2);
        assert!(!state.all_selected());
        state.toggle_all();
        assert!(state.all_selected());
        state.toggle_all();
        assert!(!state.is_selected(2));
    }

    #[test]
    fn toggle_row_ignores_unknown_ids() {
        let mut state = TableState::new(demo_appointments());
        state.toggle_row(99);
        assert!(!state.is_selected(99));
        state.toggle_row(3);
        state.toggle_row(3);
        assert!(!state.is_selected(3));
    }
}
